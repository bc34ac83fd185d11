//! Integration tests for access token verification on protected routes.

use axum::http::StatusCode;
use axum::http::header::{AUTHORIZATION, COOKIE};
use chrono::{Duration, Utc};

use sessionhub_auth::TokenCodec;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_expired_access_token_is_rejected() {
    let app = TestApp::new();
    let login = app.signed_in().await;
    let user = app.user_id(&login.access_token()).await;

    let expired = TokenCodec::new()
        .sign_at(
            &user.to_string(),
            &app.keys.access().signing,
            Utc::now() - Duration::minutes(30),
            Duration::minutes(15),
        )
        .unwrap();

    let response = app
        .request("GET", "/api/users/me", None, Some(&expired.token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Token has expired");
}

#[tokio::test]
async fn test_zero_ttl_access_token_is_rejected() {
    let mut config = crate::helpers::test_config();
    config.auth.access_token_ttl_minutes = 0;
    let app = TestApp::with_config(config);

    let token = app.signed_in().await.access_token();
    let response = app.request("GET", "/api/users/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Token has expired");
}

#[tokio::test]
async fn test_refresh_token_is_not_an_access_token() {
    let app = TestApp::new();
    let refresh_token = app.signed_in().await.cookie_value("refresh_token").unwrap();

    let response = app
        .request("GET", "/api/users/me", None, Some(&refresh_token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Token signature is invalid");
}

#[tokio::test]
async fn test_tampered_token_is_rejected() {
    let app = TestApp::new();
    let token = app.signed_in().await.access_token();

    let mut parts: Vec<String> = token.split('.').map(String::from).collect();
    let payload = parts[1].clone();
    let flipped = if payload.ends_with('A') { 'B' } else { 'A' };
    parts[1] = format!("{}{}", &payload[..payload.len() - 1], flipped);
    let tampered = parts.join(".");

    let response = app.request("GET", "/api/users/me", None, Some(&tampered)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(matches!(
        response.message(),
        "Token signature is invalid" | "Token is malformed"
    ));
}

#[tokio::test]
async fn test_garbage_token_is_malformed() {
    let app = TestApp::new();
    let response = app
        .request("GET", "/api/users/me", None, Some("definitely-not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Token is malformed");
}

#[tokio::test]
async fn test_deleted_account_is_gone() {
    let app = TestApp::new();
    let token = app.signed_in().await.access_token();
    app.store.remove(app.user_id(&token).await);

    let response = app.request("GET", "/api/users/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.message(),
        "The user belonging to this token no longer exists"
    );
}

#[tokio::test]
async fn test_bearer_header_takes_precedence_over_cookie() {
    let app = TestApp::new();
    let token = app.signed_in().await.access_token();

    let response = app
        .send(
            "GET",
            "/api/users/me",
            None,
            &[
                (AUTHORIZATION.as_str(), "Bearer garbage".to_string()),
                (COOKIE.as_str(), format!("access_token={token}")),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Token is malformed");
}

#[tokio::test]
async fn test_malformed_header_falls_back_to_cookie() {
    let app = TestApp::new();
    let token = app.signed_in().await.access_token();

    let response = app
        .send(
            "GET",
            "/api/users/me",
            None,
            &[
                (AUTHORIZATION.as_str(), "Basic dXNlcjpwYXNz".to_string()),
                (COOKIE.as_str(), format!("access_token={token}")),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}
