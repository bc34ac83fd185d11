//! Typed failure outcomes of the auth subsystem.
//!
//! Every variant is an expected, per-request condition. They are kept
//! distinct so callers can react differently (an expired access token
//! triggers the refresh flow, a forged one does not) and are collapsed to
//! [`AppError`] only at the HTTP boundary.

use sessionhub_core::error::{AppError, ErrorKind};
use thiserror::Error;

/// Why a token failed to sign or verify.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token could not be decoded into header, claims, and signature.
    #[error("Token is malformed")]
    Malformed,
    /// The signature does not match the verifying key.
    #[error("Token signature is invalid")]
    InvalidSignature,
    /// The signature is valid but the token is past its expiry.
    #[error("Token has expired")]
    Expired,
    /// Signing failed. Only possible with an unusable private key.
    #[error("Failed to sign token: {0}")]
    Signing(String),
}

/// Why a refresh attempt was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefreshRejection {
    /// No refresh token was presented.
    #[error("no refresh token presented")]
    Missing,
    /// The refresh token failed verification.
    #[error(transparent)]
    Token(TokenError),
    /// The refresh token is valid but its subject no longer exists.
    #[error("the user belonging to this token no longer exists")]
    PrincipalGone,
}

/// Errors produced by the password hasher, token codec, identity resolver,
/// and session issuer.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The stored hash is malformed or the hasher itself failed.
    #[error("Password hashing failed: {0}")]
    Hashing(String),
    /// Access token verification failed.
    #[error(transparent)]
    Token(#[from] TokenError),
    /// The request carried neither a bearer header nor a session cookie.
    #[error("You are not logged in")]
    NoCredential,
    /// The token is valid but its subject no longer resolves to a user.
    #[error("The user belonging to this token no longer exists")]
    PrincipalGone,
    /// Unknown account or wrong password. The two are deliberately merged.
    #[error("Invalid email or password")]
    InvalidCredential,
    /// The refresh token was refused; the caller must log in again.
    #[error("Could not refresh access token: {0}")]
    RefreshRejected(RefreshRejection),
    /// Registration password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,
    /// Registration hit the unique index on the normalized email.
    #[error("User with this email already exists")]
    DuplicateIdentifier,
    /// Input rejected by a policy check.
    #[error("{0}")]
    Validation(String),
    /// The identity store failed.
    #[error(transparent)]
    Store(#[from] AppError),
}

impl AuthError {
    /// Returns `true` if this is an expired access token, the one rejection
    /// a client should answer with a refresh instead of a new login.
    pub fn is_expired_token(&self) -> bool {
        matches!(self, Self::Token(TokenError::Expired))
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let message = err.to_string();
        match err {
            AuthError::Hashing(_) | AuthError::Token(TokenError::Signing(_)) => {
                AppError::new(ErrorKind::Internal, message)
            }
            AuthError::Token(_) | AuthError::NoCredential | AuthError::PrincipalGone => {
                AppError::unauthorized(message)
            }
            AuthError::RefreshRejected(_) => AppError::forbidden(message),
            AuthError::InvalidCredential
            | AuthError::PasswordMismatch
            | AuthError::Validation(_) => AppError::validation(message),
            AuthError::DuplicateIdentifier => AppError::conflict(message),
            AuthError::Store(inner) => inner,
        }
    }
}
