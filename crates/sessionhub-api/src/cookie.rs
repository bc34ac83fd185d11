//! Renders session cookie directives as `Set-Cookie` headers.

use axum::http::header::SET_COOKIE;
use axum::http::HeaderValue;
use axum::response::{IntoResponseParts, ResponseParts};

use sessionhub_auth::SessionCookie;

use crate::error::ApiError;
use sessionhub_core::error::AppError;

/// Response part that appends one `Set-Cookie` header per cookie.
#[derive(Debug, Clone)]
pub struct SetCookies(pub Vec<SessionCookie>);

impl IntoResponseParts for SetCookies {
    type Error = ApiError;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        for cookie in &self.0 {
            let value = HeaderValue::from_str(&render(cookie)).map_err(|e| {
                AppError::internal(format!("Cookie '{}' is not a valid header: {e}", cookie.name))
            })?;
            res.headers_mut().append(SET_COOKIE, value);
        }
        Ok(res)
    }
}

/// Formats a cookie as a `Set-Cookie` header value.
pub fn render(cookie: &SessionCookie) -> String {
    let mut out = format!("{}={}; Path={}", cookie.name, cookie.value, cookie.path);

    if let Some(domain) = &cookie.domain {
        out.push_str("; Domain=");
        out.push_str(domain);
    }

    if cookie.is_removal() {
        out.push_str("; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT");
    } else {
        out.push_str(&format!("; Max-Age={}", cookie.max_age_seconds));
    }

    if cookie.secure {
        out.push_str("; Secure");
    }
    if cookie.http_only {
        out.push_str("; HttpOnly");
    }
    out.push_str("; SameSite=Lax");

    out
}
