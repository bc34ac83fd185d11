//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sessionhub_core::types::ApiStatus;
use sessionhub_entity::user::{User, UserRole};

/// Success envelope carrying a payload under `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    /// Always `success`.
    pub status: ApiStatus,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    /// Wraps a payload.
    pub fn ok(data: T) -> Self {
        Self {
            status: ApiStatus::Success,
            data,
        }
    }
}

/// `{"user": ...}` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEnvelope {
    /// The user.
    pub user: UserResponse,
}

/// Response to a login or refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Always `success`.
    pub status: ApiStatus,
    /// Newly minted access token.
    pub access_token: String,
}

impl TokenResponse {
    /// Wraps an access token.
    pub fn new(access_token: String) -> Self {
        Self {
            status: ApiStatus::Success,
            access_token,
        }
    }
}

/// Public view of a user. The password hash and verification flag stay
/// server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Role.
    pub role: UserRole,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<&User> for DataResponse<UserEnvelope> {
    fn from(user: &User) -> Self {
        DataResponse::ok(UserEnvelope {
            user: UserResponse::from(user),
        })
    }
}
