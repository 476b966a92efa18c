//! Per-client rate limiting using a token bucket.

use axum::Router;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Token bucket parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quota {
    pub per_second: u64,
    pub burst_size: u32,
}

/// Public pages: login form and card previews.
pub const PUBLIC: Quota = Quota {
    per_second: 2,
    burst_size: 100,
};

/// Signed-in dashboard pages and login attempts.
pub const SECURE: Quota = Quota {
    per_second: 1,
    burst_size: 10,
};

fn governor_layer<K>(
    key_extractor: K,
    quota: Quota,
) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>
where
    K: KeyExtractor,
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(key_extractor)
            .per_second(quota.per_second)
            .burst_size(quota.burst_size)
            .finish()
            .expect("rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Wraps `router` in a rate limiter keyed by client IP.
///
/// With `behind_proxy` the IP is read from `X-Forwarded-For`, `X-Real-IP`
/// or `Forwarded`, falling back to the peer address. Otherwise only the
/// peer address is used, which needs `into_make_service_with_connect_info`.
///
/// Requests exceeding the quota receive `429 Too Many Requests`.
///
/// # Example
///
/// ```rust,ignore
/// let public = rate_limit::apply(web::routes::public_routes(), behind_proxy, rate_limit::PUBLIC);
/// ```
pub fn apply<S>(router: Router<S>, behind_proxy: bool, quota: Quota) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    if behind_proxy {
        router.layer(governor_layer(SmartIpKeyExtractor, quota))
    } else {
        router.layer(governor_layer(PeerIpKeyExtractor, quota))
    }
}

