//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered account. This is the principal a request acts as once its
/// access token has been resolved.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Lower-cased, unique email address. Doubles as the login identifier.
    pub email: String,
    /// Argon2 password hash in PHC string format.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// User role.
    pub role: UserRole,
    /// Whether the email address has been verified.
    pub verified: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to insert a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Identifier assigned by the caller.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Normalized email.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
    /// Initial verification flag.
    pub verified: bool,
    /// Creation timestamp, also used as the initial `updated_at`.
    pub created_at: DateTime<Utc>,
}

impl CreateUser {
    /// Materializes the stored row for this insert record.
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role,
            verified: self.verified,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Self-service registration input. The plaintext password lives only as
/// long as this value does and is never persisted.
#[derive(Clone, Deserialize)]
pub struct NewAccount {
    /// Display name.
    pub name: String,
    /// Email as typed by the user (normalized during registration).
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Must equal `password`.
    pub password_confirm: String,
}

impl std::fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAccount")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
