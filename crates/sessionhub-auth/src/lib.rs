//! # sessionhub-auth
//!
//! Token lifecycle and identity verification for SessionHub.
//!
//! ## Modules
//!
//! - `password` — Argon2id hashing and password policy
//! - `jwt` — RS256 token claims, key material, and codec
//! - `identity` — credential extraction and access token resolution
//! - `session` — login, refresh, registration, and logout flows

use sessionhub_core::traits::IdentityStore;
use sessionhub_entity::user::{CreateUser, User};

pub mod error;
pub mod identity;
pub mod jwt;
pub mod password;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{AuthError, RefreshRejection, TokenError};
pub use identity::{IdentityResolver, extract_credential};
pub use jwt::{IssuedToken, KeyMaterial, TokenClaims, TokenClass, TokenCodec, TokenKeys};
pub use password::{PasswordHasher, PasswordValidator};
pub use session::{Credential, SessionCookie, SessionIssuer, TokenPair};

/// The identity store the auth flows run against.
pub type UserStore = dyn IdentityStore<Principal = User, NewRecord = CreateUser>;
