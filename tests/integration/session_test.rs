//! Integration tests for the refresh flow.

use axum::http::StatusCode;
use chrono::{Duration, Utc};

use sessionhub_auth::TokenCodec;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_refresh_with_cookie() {
    let app = TestApp::new();
    let login = app.signed_in().await;
    let refresh_token = login.cookie_value("refresh_token").unwrap();

    let response = app
        .request_with_cookies("GET", "/api/auth/refresh", &[("refresh_token", &refresh_token)])
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let access = response.access_token();
    assert_eq!(response.cookie_value("access_token").as_deref(), Some(access.as_str()));
    assert_eq!(response.cookie_value("logged_in").as_deref(), Some("true"));
    assert!(response.set_cookie("refresh_token").is_none());

    let me = app.request("GET", "/api/users/me", None, Some(&access)).await;
    assert_eq!(me.status, StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_with_bearer_fallback() {
    let app = TestApp::new();
    let refresh_token = app.signed_in().await.cookie_value("refresh_token").unwrap();

    let response = app
        .request("GET", "/api/auth/refresh", None, Some(&refresh_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_without_token() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/auth/refresh", None, None).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["status"], "fail");
    assert!(response.message().starts_with("Could not refresh access token"));
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let app = TestApp::new();
    let access = app.signed_in().await.access_token();

    let response = app
        .request_with_cookies("GET", "/api/auth/refresh", &[("refresh_token", &access)])
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.message(),
        "Could not refresh access token: Token signature is invalid"
    );
}

#[tokio::test]
async fn test_refresh_rejects_expired_token() {
    let app = TestApp::new();
    let login = app.signed_in().await;
    let user = app.user_id(&login.access_token()).await;

    let expired = TokenCodec::new()
        .sign_at(
            &user.to_string(),
            &app.keys.refresh().signing,
            Utc::now() - Duration::hours(2),
            Duration::hours(1),
        )
        .unwrap();

    let response = app
        .request_with_cookies("GET", "/api/auth/refresh", &[("refresh_token", &expired.token)])
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.message(),
        "Could not refresh access token: Token has expired"
    );
}

#[tokio::test]
async fn test_refresh_after_account_deletion() {
    let app = TestApp::new();
    let login = app.signed_in().await;
    let refresh_token = login.cookie_value("refresh_token").unwrap();
    app.store.remove(app.user_id(&login.access_token()).await);

    let response = app
        .request_with_cookies("GET", "/api/auth/refresh", &[("refresh_token", &refresh_token)])
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(response.set_cookies.is_empty());
}
