//! Password policy enforcement for new passwords.

use sessionhub_core::config::AuthConfig;

use crate::error::AuthError;

/// Upper bound on accepted password length, in characters. Keeps a single
/// registration from feeding megabytes into the hasher.
const MAX_PASSWORD_LENGTH: usize = 256;

/// Validates new passwords against the configured policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password against the policy.
    pub fn validate(&self, password: &str) -> Result<(), AuthError> {
        let length = password.chars().count();

        if length < self.min_length {
            return Err(AuthError::Validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        if length > MAX_PASSWORD_LENGTH {
            return Err(AuthError::Validation(format!(
                "Password must be at most {MAX_PASSWORD_LENGTH} characters long"
            )));
        }

        Ok(())
    }
}
