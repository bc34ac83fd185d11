//! Auth handlers: register, login, refresh, logout.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum_extra::extract::CookieJar;

use sessionhub_auth::extract_credential;
use sessionhub_auth::identity::REFRESH_TOKEN_COOKIE;
use sessionhub_core::types::StatusResponse;

use crate::cookie::SetCookies;
use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{DataResponse, TokenResponse, UserEnvelope};
use crate::error::ApiError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<DataResponse<UserEnvelope>>), ApiError> {
    let user = state.issuer.register(&req.into_new_account()).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::from(&user))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<(SetCookies, Json<TokenResponse>), ApiError> {
    let pair = state.issuer.login(&req.into_credential()).await?;
    let cookies = state.issuer.login_cookies(&pair);

    Ok((
        SetCookies(cookies),
        Json(TokenResponse::new(pair.access.token)),
    ))
}

/// GET /api/auth/refresh
///
/// Reads the refresh token from its cookie, falling back to a bearer header
/// for clients that do not keep cookies.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<(SetCookies, Json<TokenResponse>), ApiError> {
    let cookie = jar.get(REFRESH_TOKEN_COOKIE).map(|c| c.value());
    let header = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    let token = match cookie.filter(|v| !v.is_empty()) {
        Some(value) => Some(value),
        None => extract_credential(header, None),
    };

    let access = state.issuer.refresh(token).await?;
    let cookies = state.issuer.refresh_cookies(&access);

    Ok((SetCookies(cookies), Json(TokenResponse::new(access.token))))
}

/// GET /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    user: CurrentUser,
) -> (SetCookies, Json<StatusResponse>) {
    tracing::info!(user_id = %user.id, "User logged out");
    (SetCookies(state.issuer.logout()), Json(StatusResponse::success()))
}
