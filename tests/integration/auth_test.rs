//! Integration tests for registration, login, and the profile endpoint.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{EMAIL, PASSWORD, TestApp};

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health-checker", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "success");
}

#[tokio::test]
async fn test_register_returns_public_user() {
    let app = TestApp::new();
    let response = app.register("  A@X.com ", PASSWORD).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["status"], "success");
    let user = &response.body["data"]["user"];
    assert_eq!(user["email"], EMAIL);
    assert_eq!(user["role"], "user");
    assert!(user.get("password_hash").is_none());
    assert!(user.get("password").is_none());
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn test_register_password_mismatch() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "name": "Alice",
                "email": EMAIL,
                "password": PASSWORD,
                "confirm_password": "secret124",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], "fail");
    assert_eq!(response.message(), "Passwords do not match");
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_register_rejects_invalid_input() {
    let app = TestApp::new();

    let bad_email = app.register("not-an-email", PASSWORD).await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);

    let short_password = app.register(EMAIL, "short").await;
    assert_eq!(short_password.status, StatusCode::BAD_REQUEST);
    assert!(short_password.message().contains("at least 8"));

    let malformed = app
        .request("POST", "/api/auth/register", Some(json!({ "email": EMAIL })), None)
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed.body["status"], "fail");

    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new();
    assert_eq!(app.register(EMAIL, PASSWORD).await.status, StatusCode::CREATED);

    let duplicate = app.register("A@x.COM", "another-pass").await;

    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert_eq!(duplicate.body["status"], "error");
    assert_eq!(duplicate.message(), "User with this email already exists");
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn test_login_success_sets_cookies() {
    let app = TestApp::new();
    let response = app.signed_in().await;

    assert_eq!(response.body["status"], "success");
    let token = response.access_token();
    assert_eq!(token.split('.').count(), 3);

    assert_eq!(response.cookie_value("access_token").as_deref(), Some(token.as_str()));
    assert!(response.cookie_value("refresh_token").is_some());
    assert_eq!(response.cookie_value("logged_in").as_deref(), Some("true"));

    let access = response.set_cookie("access_token").unwrap();
    assert!(access.contains("HttpOnly"));
    assert!(access.contains("Max-Age=900"));
    let refresh = response.set_cookie("refresh_token").unwrap();
    assert!(refresh.contains("Max-Age=3600"));
    assert!(!response.set_cookie("logged_in").unwrap().contains("HttpOnly"));
}

#[tokio::test]
async fn test_login_is_case_insensitive() {
    let app = TestApp::new();
    app.register(EMAIL, PASSWORD).await;

    let response = app.login("A@X.COM", PASSWORD).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_failures_look_identical() {
    let app = TestApp::new();
    app.register(EMAIL, PASSWORD).await;

    let wrong_password = app.login(EMAIL, "wrong-pass").await;
    let unknown_email = app.login("nobody@x.com", PASSWORD).await;

    assert_eq!(wrong_password.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_password.status, unknown_email.status);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert_eq!(wrong_password.message(), "Invalid email or password");
    assert!(wrong_password.set_cookies.is_empty());
}

#[tokio::test]
async fn test_me_with_bearer_token() {
    let app = TestApp::new();
    let token = app.signed_in().await.access_token();

    let response = app.request("GET", "/api/users/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["user"]["email"], EMAIL);
    assert_eq!(response.body["data"]["user"]["name"], "Alice");
}

#[tokio::test]
async fn test_me_with_session_cookie() {
    let app = TestApp::new();
    let token = app.signed_in().await.access_token();

    let response = app
        .request_with_cookies("GET", "/api/users/me", &[("access_token", &token)])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["user"]["email"], EMAIL);
}

#[tokio::test]
async fn test_me_without_credentials() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/users/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["status"], "fail");
    assert_eq!(response.message(), "You are not logged in");
}

#[tokio::test]
async fn test_logout_expires_cookies() {
    let app = TestApp::new();
    let token = app.signed_in().await.access_token();

    let response = app.request("GET", "/api/auth/logout", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "success");
    for name in ["access_token", "refresh_token", "logged_in"] {
        let cookie = response.set_cookie(name).unwrap();
        assert!(cookie.contains("Max-Age=0"), "{cookie}");
        assert_eq!(response.cookie_value(name).as_deref(), Some(""));
    }
}

#[tokio::test]
async fn test_logout_requires_session() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/auth/logout", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.set_cookies.is_empty());
}

#[tokio::test]
async fn test_token_survives_logout() {
    let app = TestApp::new();
    let token = app.signed_in().await.access_token();

    app.request("GET", "/api/auth/logout", None, Some(&token)).await;
    let response = app.request("GET", "/api/users/me", None, Some(&token)).await;

    // Tokens are stateless; logout only clears the client's cookies.
    assert_eq!(response.status, StatusCode::OK);
}
