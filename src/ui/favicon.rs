//! Favicon image sources for link cards.

use url::Url;

use crate::utils::destination::Destination;

/// Third-party favicon resolver queried by destination origin.
pub const FAVICON_SERVICE: &str = "https://t3.gstatic.com/faviconV2";

/// Requested icon size in pixels.
pub const FAVICON_SIZE: u32 = 64;

/// Local icon used when a destination cannot be decoded.
pub const PLACEHOLDER_ICON: &str = "/static/favicon-placeholder.svg";

/// Returns the favicon image source for a destination.
///
/// Falls back to [`PLACEHOLDER_ICON`] when the destination could not be
/// decoded. The request is unauthenticated and best effort.
pub fn favicon_src(destination: Option<&Destination>) -> String {
    match destination {
        Some(dest) => favicon_url(&dest.origin()),
        None => PLACEHOLDER_ICON.to_string(),
    }
}

/// Builds the resolver URL for an origin.
pub fn favicon_url(origin: &str) -> String {
    let size = FAVICON_SIZE.to_string();
    let params = [
        ("client", "SOCIAL"),
        ("type", "FAVICON"),
        ("fallback_opts", "TYPE,SIZE,URL"),
        ("url", origin),
        ("size", size.as_str()),
    ];

    match Url::parse_with_params(FAVICON_SERVICE, &params) {
        Ok(url) => url.into(),
        Err(_) => PLACEHOLDER_ICON.to_string(),
    }
}
