mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde::Serialize;

#[derive(Serialize)]
struct LoginForm<'a> {
    token: &'a str,
}

#[tokio::test]
async fn test_login_page_renders_form() {
    let ctx = common::create_test_state(vec![]);
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();

    let response = server.get("/dashboard/login").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"action="/dashboard/login""#));
    assert!(html.contains(r#"name="token""#));
    assert!(!html.contains("login-error"));
}

#[tokio::test]
async fn test_login_sets_cookie_and_redirects() {
    let ctx = common::create_test_state(vec![]);
    let token = ctx.sign_in("alice").await;
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();

    let response = server
        .post("/dashboard/login")
        .form(&LoginForm { token: &token })
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/dashboard/links");

    let cookie = response.header("set-cookie");
    let cookie = cookie.to_str().unwrap();
    assert!(cookie.starts_with(&format!("auth_token={token};")));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Secure"));
}

#[tokio::test]
async fn test_login_unknown_token() {
    let ctx = common::create_test_state(vec![]);
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();

    let response = server
        .post("/dashboard/login")
        .form(&LoginForm { token: "nope" })
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(response.text().contains("Invalid or revoked token"));
}

#[tokio::test]
async fn test_login_empty_token() {
    let ctx = common::create_test_state(vec![]);
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();

    let response = server
        .post("/dashboard/login")
        .form(&LoginForm { token: "" })
        .await;

    response.assert_status_bad_request();
    assert!(response.text().contains("Enter a session token"));
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let ctx = common::create_test_state(vec![]);
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();

    let response = server.post("/dashboard/logout").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/dashboard/login");
    assert!(
        response
            .header("set-cookie")
            .to_str()
            .unwrap()
            .contains("Max-Age=0")
    );
}
