//! Authentication middleware for protected routes.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;

use sessionhub_auth::extract_credential;
use sessionhub_auth::identity::ACCESS_TOKEN_COOKIE;

use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// Resolves the caller from a bearer token or the `access_token` cookie and
/// attaches it as [`CurrentUser`]. Any failure ends the request with 401.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let credential = {
        let header = request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        let cookie = jar.get(ACCESS_TOKEN_COOKIE).map(|c| c.value());
        extract_credential(header, cookie).map(str::to_owned)
    };

    let user = state.resolver.resolve(credential.as_deref()).await.map_err(|e| {
        tracing::debug!(
            path = %request.uri().path(),
            expired = e.is_expired_token(),
            "Unauthenticated request: {e}"
        );
        e
    })?;

    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}
