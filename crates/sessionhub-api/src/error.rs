//! Maps domain errors to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use sessionhub_auth::AuthError;
use sessionhub_core::error::{AppError, ErrorKind};
use sessionhub_core::types::{ApiStatus, StatusResponse};

/// An [`AppError`] on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// HTTP status for the wrapped error.
    pub fn status(&self) -> StatusCode {
        status_for(self.0.kind)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(err.into())
    }
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Database => StatusCode::BAD_GATEWAY,
        ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::Internal | ErrorKind::Configuration | ErrorKind::Serialization => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let err = self.0;

        let (api_status, message) = if status.is_server_error() {
            tracing::error!(kind = %err.kind, error = %err, "Request failed");
            // Internal detail stays in the log.
            (ApiStatus::Error, "Something went wrong".to_string())
        } else if status == StatusCode::CONFLICT {
            (ApiStatus::Error, err.message)
        } else {
            (ApiStatus::Fail, err.message)
        };

        (status, Json(StatusResponse::with_message(api_status, message))).into_response()
    }
}
