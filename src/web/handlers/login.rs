//! Sign-in and sign-out handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{HeaderValue, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::dto::login::LoginForm;
use crate::web::middleware::web_auth::{AUTH_COOKIE, LOGIN_PATH};

/// Where a successful sign-in lands.
pub const LINKS_PATH: &str = "/dashboard/links";

const CLEARED_COOKIE: &str = "auth_token=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0";

/// Template for the login page.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /dashboard/login`
pub async fn login_form_handler() -> LoginTemplate {
    LoginTemplate { error: None }
}

/// Exchanges a session token for the `auth_token` cookie.
///
/// # Endpoint
///
/// `POST /dashboard/login` with form field `token`.
///
/// # Responses
///
/// - `303 See Other` to `/dashboard/links` with the cookie set
/// - `400 Bad Request` with the form re-rendered if the token is empty
/// - `401 Unauthorized` with the form re-rendered if the token is unknown or revoked
pub async fn login_handler(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if form.validate().is_err() {
        return Ok(login_error(StatusCode::BAD_REQUEST, "Enter a session token"));
    }

    let session = match state.auth_service.authenticate(&form.token).await {
        Ok(session) => session,
        Err(AppError::Unauthorized { .. }) => {
            return Ok(login_error(
                StatusCode::UNAUTHORIZED,
                "Invalid or revoked token",
            ));
        }
        Err(e) => return Err(e),
    };

    let secure = state.base_url.as_str().starts_with("https://");
    let cookie = session_cookie(&form.token, secure)?;

    tracing::info!(user_id = session.user_id, "Dashboard sign-in");

    Ok(([(SET_COOKIE, cookie)], Redirect::to(LINKS_PATH)).into_response())
}

/// Clears the session cookie.
///
/// # Endpoint
///
/// `POST /dashboard/logout`
pub async fn logout_handler() -> Response {
    (
        [(SET_COOKIE, HeaderValue::from_static(CLEARED_COOKIE))],
        Redirect::to(LOGIN_PATH),
    )
        .into_response()
}

fn login_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        LoginTemplate {
            error: Some(message.to_string()),
        },
    )
        .into_response()
}

fn session_cookie(token: &str, secure: bool) -> Result<HeaderValue, AppError> {
    let invalid =
        || AppError::bad_request("Token contains characters not allowed in a cookie", json!({}));

    if token.contains([';', ',', ' ', '"', '\\']) {
        return Err(invalid());
    }

    let mut cookie = format!("{AUTH_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }

    HeaderValue::from_str(&cookie).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc123", false).unwrap();
        assert_eq!(
            cookie.to_str().unwrap(),
            "auth_token=abc123; Path=/; HttpOnly; SameSite=Lax"
        );

        let cookie = session_cookie("abc123", true).unwrap();
        assert!(cookie.to_str().unwrap().ends_with("; Secure"));
    }

    #[test]
    fn test_session_cookie_rejects_separators() {
        assert!(session_cookie("abc;def", false).is_err());
        assert!(session_cookie("abc def", false).is_err());
    }
}
