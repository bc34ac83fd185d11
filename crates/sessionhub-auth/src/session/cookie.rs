//! Transport-level session artifacts.
//!
//! The issuer describes cookies as plain values. The HTTP layer renders them
//! into `Set-Cookie` headers.

use chrono::Duration;

use sessionhub_core::config::AuthConfig;

use crate::identity::{ACCESS_TOKEN_COOKIE, LOGGED_IN_COOKIE, REFRESH_TOKEN_COOKIE};
use crate::jwt::{IssuedToken, KeyMaterial};

/// A cookie to set on (or clear from) the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    /// Cookie name.
    pub name: &'static str,
    /// Cookie value. Empty when clearing.
    pub value: String,
    /// `Path` attribute.
    pub path: &'static str,
    /// `Domain` attribute. Host-only when `None`.
    pub domain: Option<String>,
    /// `Secure` attribute.
    pub secure: bool,
    /// `HttpOnly` attribute.
    pub http_only: bool,
    /// `Max-Age` in seconds. Negative values expire the cookie.
    pub max_age_seconds: i64,
}

impl SessionCookie {
    /// Whether this cookie instructs the client to delete it.
    pub fn is_removal(&self) -> bool {
        self.max_age_seconds < 0
    }
}

/// Attributes shared by every session cookie.
#[derive(Debug, Clone)]
pub struct CookiePolicy {
    domain: Option<String>,
    secure: bool,
    access_max_age: Duration,
    refresh_max_age: Duration,
}

impl CookiePolicy {
    /// Builds the policy from auth configuration and loaded key lifetimes.
    pub fn new(config: &AuthConfig, keys: &KeyMaterial) -> Self {
        Self {
            domain: config.cookie_domain.clone(),
            secure: config.cookie_secure,
            access_max_age: keys.access().cookie_max_age,
            refresh_max_age: keys.refresh().cookie_max_age,
        }
    }

    fn cookie(&self, name: &'static str, value: String, http_only: bool, max_age: i64) -> SessionCookie {
        SessionCookie {
            name,
            value,
            path: "/",
            domain: self.domain.clone(),
            secure: self.secure,
            http_only,
            max_age_seconds: max_age,
        }
    }

    /// Cookies for a new access token: the token itself and the
    /// script-visible `logged_in` marker.
    pub fn access(&self, access: &IssuedToken) -> Vec<SessionCookie> {
        let max_age = self.access_max_age.num_seconds();
        vec![
            self.cookie(ACCESS_TOKEN_COOKIE, access.token.clone(), true, max_age),
            self.cookie(LOGGED_IN_COOKIE, "true".to_string(), false, max_age),
        ]
    }

    /// Cookies for a full login.
    pub fn login(&self, access: &IssuedToken, refresh: &IssuedToken) -> Vec<SessionCookie> {
        let mut cookies = self.access(access);
        cookies.insert(
            1,
            self.cookie(
                REFRESH_TOKEN_COOKIE,
                refresh.token.clone(),
                true,
                self.refresh_max_age.num_seconds(),
            ),
        );
        cookies
    }

    /// Cookies that clear every session artifact.
    pub fn cleared(&self) -> Vec<SessionCookie> {
        vec![
            self.cookie(ACCESS_TOKEN_COOKIE, String::new(), true, -1),
            self.cookie(REFRESH_TOKEN_COOKIE, String::new(), true, -1),
            self.cookie(LOGGED_IN_COOKIE, String::new(), false, -1),
        ]
    }
}
