//! Canonical deployment origin used to build shortened URLs.

use std::fmt;

/// The deployment's canonical base URL, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a base URL, trimming any trailing `/`.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        Self(url.trim_end_matches('/').to_string())
    }

    /// Returns the base URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the shortened URL `<base>/<slug>`.
    pub fn shorten(&self, slug: &str) -> String {
        format!("{}/{}", self.0, slug)
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strips the scheme and `://` from a URL for display.
///
/// Returns the input unchanged if it has no `://`.
pub fn display_label(url: &str) -> &str {
    url.split_once("://").map_or(url, |(_, rest)| rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten() {
        let base = BaseUrl::new("https://sho.rt");
        assert_eq!(base.shorten("abc123"), "https://sho.rt/abc123");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let base = BaseUrl::new("https://sho.rt/");
        assert_eq!(base.as_str(), "https://sho.rt");
        assert_eq!(base.shorten("x"), "https://sho.rt/x");
    }

    #[test]
    fn test_display_label() {
        assert_eq!(display_label("https://sho.rt/abc123"), "sho.rt/abc123");
        assert_eq!(display_label("http://localhost:3000/a"), "localhost:3000/a");
        assert_eq!(display_label("sho.rt/abc"), "sho.rt/abc");
    }
}
