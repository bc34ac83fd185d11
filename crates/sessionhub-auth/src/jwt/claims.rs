//! Claims payload carried by access and refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered claims embedded in every token.
///
/// Both token classes share this shape. They are told apart only by the key
/// pair that signs them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject, the principal's identifier.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Not-before timestamp (seconds since epoch).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl TokenClaims {
    /// Builds claims valid from `issued_at` for `ttl_seconds`.
    pub fn new(subject: impl Into<String>, issued_at: DateTime<Utc>, ttl_seconds: i64) -> Self {
        let iat = issued_at.timestamp();
        Self {
            sub: subject.into(),
            iat,
            nbf: Some(iat),
            exp: iat.saturating_add(ttl_seconds.max(0)),
        }
    }

    /// Returns the subject claim.
    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Whether the token is expired at `now`. The expiry instant itself
    /// counts as expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}
