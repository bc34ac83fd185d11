//! JSON response envelope shared by every endpoint.

use serde::{Deserialize, Serialize};

/// Outcome marker carried in the `status` field of every response body.
///
/// `fail` is a client-side problem (bad input, bad credential), `error` a
/// server-side one or a conflict with stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    /// The request succeeded.
    Success,
    /// The request was rejected because of the caller's input or credential.
    Fail,
    /// The request could not be completed.
    Error,
}

/// `{"status": ..., "message": ...}` body used for errors and bare acknowledgements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Outcome marker.
    pub status: ApiStatus,
    /// Human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusResponse {
    /// A bare success acknowledgement.
    pub fn success() -> Self {
        Self {
            status: ApiStatus::Success,
            message: None,
        }
    }

    /// A response with the given status and message.
    pub fn with_message(status: ApiStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
        }
    }
}
