//! Locating the bearer credential on an incoming request.

/// Cookie that carries the access token.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
/// Cookie that carries the refresh token.
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";
/// Non-HttpOnly cookie that tells browser scripts a session exists.
pub const LOGGED_IN_COOKIE: &str = "logged_in";

/// Picks the token to verify from the `Authorization` header value and the
/// session cookie value.
///
/// A well-formed `Bearer <token>` header wins. A missing or malformed header
/// falls back to the cookie. Empty values count as absent.
pub fn extract_credential<'a>(
    authorization: Option<&'a str>,
    cookie: Option<&'a str>,
) -> Option<&'a str> {
    authorization
        .and_then(bearer_token)
        .or_else(|| cookie.map(str::trim).filter(|value| !value.is_empty()))
}

fn bearer_token(header: &str) -> Option<&str> {
    let mut fields = header.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Some(token),
        _ => None,
    }
}
