//! RS256 token signing and verification.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::Serialize;

use crate::error::TokenError;

use super::claims::TokenClaims;

/// A freshly signed token and the instant it stops being accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedToken {
    /// Compact JWS string.
    pub token: String,
    /// Expiry embedded in the token.
    pub expires_at: DateTime<Utc>,
}

/// Signs and verifies compact RS256 tokens.
///
/// Stateless. Keys are passed per call so one codec serves both token
/// classes, and verification never needs a private key.
#[derive(Clone)]
pub struct TokenCodec {
    validation: Validation,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &Algorithm::RS256)
            .finish()
    }
}

impl Default for TokenCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenCodec {
    /// Creates a codec for RS256 with zero clock leeway.
    pub fn new() -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        // Expiry is checked after the signature so that a forged token never
        // reports as merely expired.
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self { validation }
    }

    /// Signs a token for `subject` that expires `ttl` from now.
    pub fn sign(
        &self,
        subject: &str,
        key: &EncodingKey,
        ttl: Duration,
    ) -> Result<IssuedToken, TokenError> {
        self.sign_at(subject, key, Utc::now(), ttl)
    }

    /// Signs a token for `subject` issued at `issued_at`.
    pub fn sign_at(
        &self,
        subject: &str,
        key: &EncodingKey,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<IssuedToken, TokenError> {
        let claims = TokenClaims::new(subject, issued_at, ttl.num_seconds());
        let header = Header::new(Algorithm::RS256);

        let token = encode(&header, &claims, key).map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok(IssuedToken {
            token,
            expires_at: claims.expires_at(),
        })
    }

    /// Verifies the signature and expiry of `token`.
    pub fn verify(&self, token: &str, key: &DecodingKey) -> Result<TokenClaims, TokenError> {
        self.verify_at(token, key, Utc::now())
    }

    /// Verifies `token` as of `now`.
    pub fn verify_at(
        &self,
        token: &str,
        key: &DecodingKey,
        now: DateTime<Utc>,
    ) -> Result<TokenClaims, TokenError> {
        let data = decode::<TokenClaims>(token, key, &self.validation).map_err(classify)?;

        if data.claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }
}

fn classify(err: jsonwebtoken::errors::Error) -> TokenError {
    match err.kind() {
        JwtErrorKind::InvalidSignature | JwtErrorKind::InvalidAlgorithm => {
            TokenError::InvalidSignature
        }
        JwtErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    }
}
