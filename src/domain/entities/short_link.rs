//! Short link record as stored by the shortener and rendered by link cards.

use chrono::{DateTime, Utc};

/// A shortened URL mapping as read from storage.
///
/// `url` holds the destination exactly as stored, which is percent-encoded.
/// Use [`crate::utils::destination::decode_destination`] before display.
/// Records are immutable snapshots for the duration of a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLinkRecord {
    pub slug: String,
    pub url: String,
    pub description: Option<String>,
    pub views: u64,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<i64>,
}

impl ShortLinkRecord {
    /// Creates a new record snapshot.
    pub fn new(
        slug: String,
        url: String,
        description: Option<String>,
        views: u64,
        created_at: DateTime<Utc>,
        created_by: Option<i64>,
    ) -> Self {
        Self {
            slug,
            url,
            description,
            views,
            created_at,
            created_by,
        }
    }

    /// Returns the description when it is present and non-empty.
    pub fn visible_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Returns a copy of this record with `url` replaced.
    pub fn with_url(&self, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(description: Option<&str>) -> ShortLinkRecord {
        ShortLinkRecord::new(
            "abc123".to_string(),
            "https%3A%2F%2Fexample.com".to_string(),
            description.map(str::to_string),
            0,
            Utc::now(),
            Some(7),
        )
    }

    #[test]
    fn test_visible_description_skips_empty() {
        assert_eq!(record(None).visible_description(), None);
        assert_eq!(record(Some("")).visible_description(), None);
        assert_eq!(record(Some("docs")).visible_description(), Some("docs"));
    }

    #[test]
    fn test_visible_description_keeps_whitespace() {
        assert_eq!(record(Some(" ")).visible_description(), Some(" "));
    }

    #[test]
    fn test_with_url_keeps_other_fields() {
        let original = record(Some("docs"));
        let decoded = original.with_url("https://example.com");

        assert_eq!(decoded.url, "https://example.com");
        assert_eq!(decoded.slug, original.slug);
        assert_eq!(decoded.created_by, Some(7));
        assert_eq!(original.url, "https%3A%2F%2Fexample.com");
    }
}
