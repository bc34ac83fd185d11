//! Argon2id password hashing and verification.

use std::sync::OnceLock;

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use sessionhub_core::config::PasswordHashConfig;
use sessionhub_core::error::AppError;

use crate::error::AuthError;

/// Hashes credentials at rest with Argon2id.
///
/// Output is a PHC string that embeds the salt and the cost parameters, so
/// verification needs nothing but the stored hash. Verification always uses
/// the parameters recorded in the hash, which lets the configured cost be
/// raised without invalidating existing hashes.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
    decoy: OnceLock<String>,
}

impl PasswordHasher {
    /// Creates a hasher with the configured cost factor.
    pub fn new(config: &PasswordHashConfig) -> Result<Self, AppError> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| AppError::configuration(format!("Invalid Argon2 parameters: {e}")))?;

        Ok(Self {
            params,
            decoy: OnceLock::new(),
        })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a plaintext secret with a fresh random salt.
    pub fn hash(&self, secret: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Verifies a candidate secret against a stored hash in constant time.
    ///
    /// Returns `Ok(false)` on a mismatch. Only a structurally malformed
    /// stored hash is an error.
    pub fn verify(&self, stored_hash: &str, candidate: &str) -> Result<bool, AuthError> {
        let parsed_hash = PasswordHash::new(stored_hash)
            .map_err(|e| AuthError::Hashing(format!("Invalid password hash format: {e}")))?;

        match self
            .argon2()
            .verify_password(candidate.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::Hashing(format!(
                "Password verification failed: {e}"
            ))),
        }
    }

    /// Burns the same work as a real verification against a throwaway hash.
    ///
    /// Called when the account does not exist so that response timing does
    /// not reveal which email addresses are registered.
    pub fn verify_decoy(&self, candidate: &str) {
        let decoy = self
            .decoy
            .get_or_init(|| self.hash("decoy-credential").unwrap_or_default());
        if !decoy.is_empty() {
            let _ = self.verify(decoy, candidate);
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
            decoy: OnceLock::new(),
        }
    }
}
