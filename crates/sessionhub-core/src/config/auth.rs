//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token signing keys, lifetimes, session cookie attributes, and password
/// hashing cost.
///
/// The four keys are base64-encoded PEM documents. Access and refresh tokens
/// use separate RSA key pairs so that one class can never be accepted as the
/// other.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// RSA private key used to sign access tokens.
    pub access_token_private_key: String,
    /// RSA public key used to verify access tokens.
    pub access_token_public_key: String,
    /// RSA private key used to sign refresh tokens.
    pub refresh_token_private_key: String,
    /// RSA public key used to verify refresh tokens.
    pub refresh_token_public_key: String,
    /// Access token lifetime in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_token_ttl_minutes: u64,
    /// `Max-Age` of the access token cookie, in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_token_max_age_minutes: u64,
    /// Refresh token lifetime in minutes.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_token_ttl_minutes: u64,
    /// `Max-Age` of the refresh token cookie, in minutes.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_token_max_age_minutes: u64,
    /// `Domain` attribute for session cookies. Host-only when unset.
    #[serde(default)]
    pub cookie_domain: Option<String>,
    /// Whether session cookies carry the `Secure` attribute.
    #[serde(default)]
    pub cookie_secure: bool,
    /// Minimum password length accepted at registration.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Argon2 cost parameters.
    #[serde(default)]
    pub password: PasswordHashConfig,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("access_token_ttl_minutes", &self.access_token_ttl_minutes)
            .field("access_token_max_age_minutes", &self.access_token_max_age_minutes)
            .field("refresh_token_ttl_minutes", &self.refresh_token_ttl_minutes)
            .field("refresh_token_max_age_minutes", &self.refresh_token_max_age_minutes)
            .field("cookie_domain", &self.cookie_domain)
            .field("cookie_secure", &self.cookie_secure)
            .field("password_min_length", &self.password_min_length)
            .field("password", &self.password)
            .finish_non_exhaustive()
    }
}

/// Argon2id cost factor.
///
/// The defaults are the OWASP baseline (19 MiB, 2 passes, 1 lane).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordHashConfig {
    /// Memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    /// Number of passes.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Degree of parallelism.
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for PasswordHashConfig {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    60
}

fn default_password_min() -> usize {
    8
}

fn default_memory_kib() -> u32 {
    19 * 1024
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}
