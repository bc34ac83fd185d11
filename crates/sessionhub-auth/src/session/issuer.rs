//! Login, refresh, registration, and logout flows.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use sessionhub_core::config::AuthConfig;
use sessionhub_core::error::AppError;
use sessionhub_entity::user::{CreateUser, NewAccount, User, UserRole};

use crate::UserStore;
use crate::error::{AuthError, RefreshRejection};
use crate::jwt::{IssuedToken, KeyMaterial, TokenCodec};
use crate::password::{PasswordHasher, PasswordValidator};

use super::cookie::{CookiePolicy, SessionCookie};

/// Field the identity store must keep unique.
const EMAIL_FIELD: &str = "email";

/// Login input. The secret is never logged or echoed.
#[derive(Clone)]
pub struct Credential {
    /// Email as typed by the user.
    pub identifier: String,
    /// Plaintext password.
    pub secret: String,
}

impl Credential {
    /// Creates a credential from raw login input.
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}

/// Access and refresh tokens minted by a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access: IssuedToken,
    /// Long-lived refresh token.
    pub refresh: IssuedToken,
}

/// Lower-cases and trims a login identifier.
pub fn normalize_identifier(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}

/// Orchestrates the session lifecycle on top of the hasher, the codec, and
/// the identity store.
///
/// Tokens are stateless. Logout only clears cookies, and refresh mints a new
/// access token without rotating the refresh token.
#[derive(Clone)]
pub struct SessionIssuer {
    codec: TokenCodec,
    keys: Arc<KeyMaterial>,
    hasher: Arc<PasswordHasher>,
    validator: PasswordValidator,
    store: Arc<UserStore>,
    cookies: CookiePolicy,
}

impl std::fmt::Debug for SessionIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionIssuer")
            .field("codec", &self.codec)
            .field("validator", &self.validator)
            .field("cookies", &self.cookies)
            .finish_non_exhaustive()
    }
}

impl SessionIssuer {
    /// Creates an issuer with all required dependencies.
    pub fn new(
        codec: TokenCodec,
        keys: Arc<KeyMaterial>,
        hasher: Arc<PasswordHasher>,
        store: Arc<UserStore>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            cookies: CookiePolicy::new(config, &keys),
            validator: PasswordValidator::new(config),
            codec,
            keys,
            hasher,
            store,
        }
    }

    /// Verifies a credential and mints an access/refresh token pair.
    ///
    /// An unknown email and a wrong password fail identically.
    pub async fn login(&self, credential: &Credential) -> Result<TokenPair, AuthError> {
        let email = normalize_identifier(&credential.identifier);

        let Some(user) = self.store.find_by_email(&email).await? else {
            let hasher = Arc::clone(&self.hasher);
            let secret = credential.secret.clone();
            run_blocking(move || {
                hasher.verify_decoy(&secret);
                Ok(())
            })
            .await?;
            debug!(email = %email, "Login for unknown email");
            return Err(AuthError::InvalidCredential);
        };

        let hasher = Arc::clone(&self.hasher);
        let stored_hash = user.password_hash.clone();
        let secret = credential.secret.clone();
        let matches = run_blocking(move || hasher.verify(&stored_hash, &secret)).await?;

        if !matches {
            debug!(user_id = %user.id, "Login with wrong password");
            return Err(AuthError::InvalidCredential);
        }

        let pair = self.mint_pair(&user.id.to_string())?;
        info!(user_id = %user.id, "User logged in");
        Ok(pair)
    }

    /// Exchanges a refresh token for a new access token.
    pub async fn refresh(&self, refresh_token: Option<&str>) -> Result<IssuedToken, AuthError> {
        let token = refresh_token.ok_or(AuthError::RefreshRejected(RefreshRejection::Missing))?;

        let claims = self
            .codec
            .verify(token, &self.keys.refresh().verifying)
            .map_err(|e| {
                debug!(reason = %e, "Rejected refresh token");
                AuthError::RefreshRejected(RefreshRejection::Token(e))
            })?;

        let gone = || AuthError::RefreshRejected(RefreshRejection::PrincipalGone);
        let user_id = Uuid::parse_str(claims.subject()).map_err(|_| gone())?;
        let user = self.store.find_by_id(user_id).await?.ok_or_else(gone)?;

        let access = self.codec.sign(
            &user.id.to_string(),
            &self.keys.access().signing,
            self.keys.access().ttl,
        )?;
        debug!(user_id = %user.id, "Access token refreshed");
        Ok(access)
    }

    /// Registers a new account and returns it as stored.
    pub async fn register(&self, account: &NewAccount) -> Result<User, AuthError> {
        self.validator.validate(&account.password)?;
        if account.password != account.password_confirm {
            return Err(AuthError::PasswordMismatch);
        }

        let name = account.name.trim();
        if name.is_empty() {
            return Err(AuthError::Validation("Name is required".to_string()));
        }
        let email = normalize_identifier(&account.email);
        if email.is_empty() {
            return Err(AuthError::Validation("Email is required".to_string()));
        }

        let hasher = Arc::clone(&self.hasher);
        let password = account.password.clone();
        let password_hash = run_blocking(move || hasher.hash(&password)).await?;

        let record = CreateUser {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email,
            password_hash,
            role: UserRole::User,
            verified: true,
            created_at: Utc::now(),
        };

        let id = self.store.insert(&record).await.map_err(|e| {
            if e.is_conflict() {
                AuthError::DuplicateIdentifier
            } else {
                AuthError::Store(e)
            }
        })?;

        if let Err(e) = self.store.ensure_unique_index(EMAIL_FIELD).await {
            warn!(error = %e, "Could not ensure unique email index");
        }

        let user = self.store.find_by_id(id).await?.ok_or_else(|| {
            AuthError::Store(AppError::internal(
                "Registered user vanished before it could be read back",
            ))
        })?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Cookies that end the client's session. Issued tokens stay valid until
    /// they expire.
    pub fn logout(&self) -> Vec<SessionCookie> {
        self.cookies.cleared()
    }

    /// Cookies delivering a freshly minted token pair.
    pub fn login_cookies(&self, pair: &TokenPair) -> Vec<SessionCookie> {
        self.cookies.login(&pair.access, &pair.refresh)
    }

    /// Cookies delivering a refreshed access token.
    pub fn refresh_cookies(&self, access: &IssuedToken) -> Vec<SessionCookie> {
        self.cookies.access(access)
    }

    fn mint_pair(&self, subject: &str) -> Result<TokenPair, AuthError> {
        let access_keys = self.keys.access();
        let refresh_keys = self.keys.refresh();

        Ok(TokenPair {
            access: self
                .codec
                .sign(subject, &access_keys.signing, access_keys.ttl)?,
            refresh: self
                .codec
                .sign(subject, &refresh_keys.signing, refresh_keys.ttl)?,
        })
    }
}

/// Runs CPU-bound hashing off the async worker threads.
async fn run_blocking<T, F>(task: F) -> Result<T, AuthError>
where
    F: FnOnce() -> Result<T, AuthError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| AuthError::Hashing(format!("Hashing task failed: {e}")))?
}
