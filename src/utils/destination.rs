//! Decoding of stored destination URLs.
//!
//! Destinations are stored percent-encoded (the whole URL passed through a
//! component encoder). They are decoded exactly once before being displayed
//! or used to derive an origin.

use url::Url;

/// Errors that can occur while decoding a stored destination.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DestinationError {
    #[error("Malformed percent-encoding at byte {0}")]
    MalformedEncoding(usize),

    #[error("Decoded destination is not valid UTF-8")]
    InvalidUtf8,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// A destination URL decoded from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    decoded: String,
    url: Url,
}

impl Destination {
    /// The decoded URL text, exactly as the user originally entered it.
    pub fn as_str(&self) -> &str {
        &self.decoded
    }

    /// ASCII serialization of the URL origin, e.g. `https://example.com`.
    ///
    /// Opaque origins (such as `mailto:`) serialize as `null`.
    pub fn origin(&self) -> String {
        self.url.origin().ascii_serialization()
    }

    /// Returns true for `http` and `https` destinations.
    pub fn is_web(&self) -> bool {
        matches!(self.url.scheme(), "http" | "https")
    }
}

/// Percent-decodes a stored destination and parses it as a URL.
///
/// A `%` must be followed by two hex digits, and the decoded bytes must form
/// valid UTF-8.
///
/// # Errors
///
/// Returns [`DestinationError::MalformedEncoding`] for a dangling or
/// non-hex escape, [`DestinationError::InvalidUtf8`] if the decoded bytes are
/// not UTF-8, and [`DestinationError::InvalidUrl`] if the result does not
/// parse as an absolute URL.
///
/// # Examples
///
/// ```ignore
/// let dest = decode_destination("https%3A%2F%2Fexample.com%2Fpage").unwrap();
/// assert_eq!(dest.as_str(), "https://example.com/page");
/// assert_eq!(dest.origin(), "https://example.com");
/// ```
pub fn decode_destination(stored: &str) -> Result<Destination, DestinationError> {
    check_escapes(stored)?;

    let decoded = urlencoding::decode(stored)
        .map_err(|_| DestinationError::InvalidUtf8)?
        .into_owned();

    let url = Url::parse(&decoded).map_err(|e| DestinationError::InvalidUrl(e.to_string()))?;

    Ok(Destination { decoded, url })
}

/// Rejects `%` escapes not followed by two hex digits.
fn check_escapes(input: &str) -> Result<(), DestinationError> {
    let bytes = input.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(DestinationError::MalformedEncoding(i));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_component_encoded_url() {
        let dest = decode_destination("https%3A%2F%2Fexample.com%2Fpage").unwrap();

        assert_eq!(dest.as_str(), "https://example.com/page");
        assert_eq!(dest.origin(), "https://example.com");
        assert!(dest.is_web());
    }

    #[test]
    fn test_plain_url_passes_through() {
        let dest = decode_destination("https://example.com/a?b=c").unwrap();
        assert_eq!(dest.as_str(), "https://example.com/a?b=c");
    }

    #[test]
    fn test_decodes_only_once() {
        // %2520 is an encoded "%20"; a single decode leaves "%20" in place.
        let dest = decode_destination("https%3A%2F%2Fexample.com%2Fa%2520b").unwrap();
        assert_eq!(dest.as_str(), "https://example.com/a%20b");
    }

    #[test]
    fn test_origin_keeps_non_default_port() {
        let dest = decode_destination("http%3A%2F%2Flocalhost%3A8080%2Fx").unwrap();
        assert_eq!(dest.origin(), "http://localhost:8080");
    }

    #[test]
    fn test_opaque_origin() {
        let dest = decode_destination("mailto%3Ame%40example.com").unwrap();

        assert_eq!(dest.origin(), "null");
        assert!(!dest.is_web());
    }

    #[test]
    fn test_malformed_escape() {
        assert_eq!(
            decode_destination("https%3A%2F%2Fexample.com%2"),
            Err(DestinationError::MalformedEncoding(25))
        );
        assert!(matches!(
            decode_destination("https://example.com/%zz"),
            Err(DestinationError::MalformedEncoding(_))
        ));
    }

    #[test]
    fn test_invalid_utf8() {
        assert_eq!(
            decode_destination("https%3A%2F%2Fexample.com%2F%FF"),
            Err(DestinationError::InvalidUtf8)
        );
    }

    #[test]
    fn test_relative_url_rejected() {
        assert!(matches!(
            decode_destination("example.com%2Fpage"),
            Err(DestinationError::InvalidUrl(_))
        ));
    }
}
