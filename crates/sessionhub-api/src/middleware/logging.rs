//! Request/response logging middleware.

use axum::extract::Request;
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;
use std::time::Instant;
use tracing::{info, warn};

use sessionhub_auth::identity::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};

/// Logs method, path, status, duration, and where the caller's credential
/// came from. Token values are never logged.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let credential = credential_source(request.headers());
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    let status = response.status();

    if status.is_server_error() {
        warn!(%method, %path, status = status.as_u16(), credential, duration_ms, "HTTP request failed");
    } else {
        info!(%method, %path, status = status.as_u16(), credential, duration_ms, "HTTP request");
    }

    response
}

/// Which credential carrier a request presented.
fn credential_source(headers: &HeaderMap) -> &'static str {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| {
            v.split_whitespace()
                .next()
                .is_some_and(|scheme| scheme.eq_ignore_ascii_case("bearer"))
        });
    if bearer {
        return "bearer";
    }

    let jar = CookieJar::from_headers(headers);
    if jar.get(ACCESS_TOKEN_COOKIE).is_some() {
        "access_cookie"
    } else if jar.get(REFRESH_TOKEN_COOKIE).is_some() {
        "refresh_cookie"
    } else {
        "none"
    }
}
