//! Request DTOs with validation.

use serde::Deserialize;
use validator::Validate;

use sessionhub_auth::Credential;
use sessionhub_entity::user::NewAccount;

/// Registration request body.
#[derive(Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Password confirmation.
    #[serde(rename = "confirm_password")]
    #[validate(length(min = 1, message = "Password confirmation is required"))]
    pub password_confirm: String,
}

impl RegisterRequest {
    /// Converts into the registration input of the session issuer.
    pub fn into_new_account(self) -> NewAccount {
        NewAccount {
            name: self.name,
            email: self.email,
            password: self.password,
            password_confirm: self.password_confirm,
        }
    }
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Login request body.
#[derive(Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginRequest {
    /// Converts into a login credential.
    pub fn into_credential(self) -> Credential {
        Credential::new(self.email, self.password)
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
