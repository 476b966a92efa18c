//! Cookie-based sessions for the web dashboard.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::COOKIE},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::state::AppState;

/// Name of the cookie holding the raw session token.
pub const AUTH_COOKIE: &str = "auth_token";

/// Where unauthenticated dashboard requests are sent.
pub const LOGIN_PATH: &str = "/dashboard/login";

/// Extracts the `auth_token` cookie value from request headers.
///
/// Handles multiple cookies in one `Cookie` header and ignores the others.
/// An empty value counts as no token.
pub fn token_from_cookies(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| {
            let (name, value) = cookie.trim().split_once('=')?;
            (name == AUTH_COOKIE && !value.is_empty()).then(|| value.to_string())
        })
}

/// Requires a valid session on dashboard routes.
///
/// # Cookie Format
///
/// ```text
/// Cookie: auth_token=<token>
/// ```
///
/// On success the resolved [`crate::domain::entities::Session`] is inserted
/// into request extensions for handlers to extract.
///
/// # Errors
///
/// Redirects to `/dashboard/login` if the cookie is missing or the token is
/// unknown or revoked.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/links", get(links_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), web_auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let token = token_from_cookies(req.headers()).ok_or_else(|| Redirect::to(LOGIN_PATH))?;

    match st.auth_service.authenticate(&token).await {
        Ok(session) => {
            req.extensions_mut().insert(session);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Dashboard session rejected");
            Err(Redirect::to(LOGIN_PATH))
        }
    }
}

/// Resolves a session when one is present, without requiring it.
///
/// Used on public pages that still show owner-only actions to the owner.
pub async fn optional_session(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    if let Some(token) = token_from_cookies(req.headers())
        && let Ok(session) = st.auth_service.authenticate(&token).await
    {
        req.extensions_mut().insert(session);
    }

    next.run(req).await
}
