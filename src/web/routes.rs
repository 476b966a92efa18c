//! Web dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    card_handler, links_handler, login_form_handler, login_handler, logout_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Protected dashboard routes requiring a session.
///
/// Protected via [`crate::web::middleware::web_auth::layer`].
///
/// # Endpoints
///
/// - `GET /links` - Paginated card list of the signed-in user's links
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/links", get(links_handler))
}

/// Public dashboard routes without authentication.
///
/// # Endpoints
///
/// - `GET  /login`  - Login form
/// - `POST /login`  - Exchange a token for a session cookie
/// - `POST /logout` - Clear the session cookie
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_form_handler).post(login_handler))
        .route("/logout", post(logout_handler))
}

/// Card preview routes, with an optional session.
///
/// Wrapped in [`crate::web::middleware::web_auth::optional_session`].
///
/// # Endpoints
///
/// - `GET /l/{slug}` - A single link card
pub fn preview_routes() -> Router<AppState> {
    Router::new().route("/l/{slug}", get(card_handler))
}
