//! RSA key material for the two token classes.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::Duration;
use jsonwebtoken::{DecodingKey, EncodingKey};

use sessionhub_core::config::AuthConfig;
use sessionhub_core::error::AppError;

/// The two token classes. Each has its own key pair and lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Short-lived token presented on every request.
    Access,
    /// Long-lived token exchanged for new access tokens.
    Refresh,
}

impl TokenClass {
    /// Lowercase name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
        }
    }
}

/// Signing and verifying keys plus lifetimes for one token class.
#[derive(Clone)]
pub struct TokenKeys {
    /// Private key used to sign.
    pub signing: EncodingKey,
    /// Public key used to verify.
    pub verifying: DecodingKey,
    /// Token lifetime.
    pub ttl: Duration,
    /// `Max-Age` of the cookie that carries the token.
    pub cookie_max_age: Duration,
}

impl std::fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenKeys")
            .field("ttl", &self.ttl)
            .field("cookie_max_age", &self.cookie_max_age)
            .finish_non_exhaustive()
    }
}

impl TokenKeys {
    /// Parses a PEM-encoded RSA key pair.
    pub fn from_pem(
        private_pem: &[u8],
        public_pem: &[u8],
        ttl: Duration,
        cookie_max_age: Duration,
    ) -> Result<Self, AppError> {
        let signing = EncodingKey::from_rsa_pem(private_pem)
            .map_err(|e| AppError::configuration(format!("Invalid RSA private key: {e}")))?;
        let verifying = DecodingKey::from_rsa_pem(public_pem)
            .map_err(|e| AppError::configuration(format!("Invalid RSA public key: {e}")))?;

        Ok(Self {
            signing,
            verifying,
            ttl,
            cookie_max_age,
        })
    }

    fn from_base64_pem(
        name: &str,
        private_b64: &str,
        public_b64: &str,
        ttl_minutes: u64,
        max_age_minutes: u64,
    ) -> Result<Self, AppError> {
        let private_pem = decode_base64(&format!("{name}_token_private_key"), private_b64)?;
        let public_pem = decode_base64(&format!("{name}_token_public_key"), public_b64)?;

        let ttl = minutes(&format!("{name}_token_ttl_minutes"), ttl_minutes)?;
        let max_age = minutes(&format!("{name}_token_max_age_minutes"), max_age_minutes)?;

        Self::from_pem(&private_pem, &public_pem, ttl, max_age)
            .map_err(|e| AppError::configuration(format!("{name} token keys: {}", e.message)))
    }
}

/// Process-wide key material. Loaded once at startup and read-only after.
#[derive(Debug, Clone)]
pub struct KeyMaterial {
    access: TokenKeys,
    refresh: TokenKeys,
}

impl KeyMaterial {
    /// Builds key material from already-parsed key pairs.
    pub fn new(access: TokenKeys, refresh: TokenKeys) -> Self {
        Self { access, refresh }
    }

    /// Decodes the base64 PEM keys and lifetimes from configuration.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AppError> {
        let access = TokenKeys::from_base64_pem(
            "access",
            &config.access_token_private_key,
            &config.access_token_public_key,
            config.access_token_ttl_minutes,
            config.access_token_max_age_minutes,
        )?;
        let refresh = TokenKeys::from_base64_pem(
            "refresh",
            &config.refresh_token_private_key,
            &config.refresh_token_public_key,
            config.refresh_token_ttl_minutes,
            config.refresh_token_max_age_minutes,
        )?;

        Ok(Self::new(access, refresh))
    }

    /// Keys for the given token class.
    pub fn get(&self, class: TokenClass) -> &TokenKeys {
        match class {
            TokenClass::Access => &self.access,
            TokenClass::Refresh => &self.refresh,
        }
    }

    /// Access token keys.
    pub fn access(&self) -> &TokenKeys {
        &self.access
    }

    /// Refresh token keys.
    pub fn refresh(&self) -> &TokenKeys {
        &self.refresh
    }
}

fn decode_base64(field: &str, value: &str) -> Result<Vec<u8>, AppError> {
    STANDARD
        .decode(value.trim())
        .map_err(|e| AppError::configuration(format!("auth.{field} is not valid base64: {e}")))
}

fn minutes(field: &str, value: u64) -> Result<Duration, AppError> {
    i64::try_from(value)
        .ok()
        .and_then(Duration::try_minutes)
        .ok_or_else(|| AppError::configuration(format!("auth.{field} is out of range: {value}")))
}
