//! Slug validation for path parameters.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Maximum accepted slug length.
pub const MAX_SLUG_LEN: usize = 64;

static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("slug regex is valid"));

/// Validates a slug taken from a request path.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_slug(slug: &str) -> Result<(), AppError> {
    if slug.is_empty() || slug.len() > MAX_SLUG_LEN {
        return Err(AppError::bad_request(
            "Slug length is out of range",
            json!({ "slug": slug, "max_length": MAX_SLUG_LEN }),
        ));
    }

    if !SLUG_REGEX.is_match(slug) {
        return Err(AppError::bad_request(
            "Slug contains invalid characters",
            json!({ "slug": slug, "allowed": "A-Z a-z 0-9 - _" }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs() {
        assert!(validate_slug("abc123").is_ok());
        assert!(validate_slug("My_Link-2024").is_ok());
        assert!(validate_slug("a").is_ok());
        assert!(validate_slug(&"x".repeat(MAX_SLUG_LEN)).is_ok());
    }

    #[test]
    fn test_invalid_slugs() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug(&"x".repeat(MAX_SLUG_LEN + 1)).is_err());
        assert!(validate_slug("has space").is_err());
        assert!(validate_slug("dots.not.allowed").is_err());
        assert!(validate_slug("<script>").is_err());
    }

    #[test]
    fn test_error_is_validation() {
        assert!(matches!(
            validate_slug("bad slug"),
            Err(AppError::Validation { .. })
        ));
    }
}
