//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check (public)
//! - `GET  /l/{slug}`    - Card preview (public, session optional)
//! - `/dashboard/*`      - Web UI (cookie session required except login)
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Authentication** - Cookie session
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::handlers::health_handler;
use crate::web::middleware::{rate_limit, tracing, web_auth};
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   forwarding headers instead of the peer socket address; enable only
///   when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let web_protected = rate_limit::apply(
        web::routes::protected_routes().route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        )),
        behind_proxy,
        rate_limit::SECURE,
    );

    let web_public = rate_limit::apply(
        web::routes::public_routes(),
        behind_proxy,
        rate_limit::SECURE,
    );

    let preview = rate_limit::apply(
        web::routes::preview_routes().route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::optional_session,
        )),
        behind_proxy,
        rate_limit::PUBLIC,
    );

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(preview)
        .nest("/dashboard", Router::new().merge(web_protected).merge(web_public))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
