//! Health check handler.

use axum::Json;

use sessionhub_core::types::{ApiStatus, StatusResponse};

/// GET /api/health-checker
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse::with_message(
        ApiStatus::Success,
        "SessionHub is up and running",
    ))
}
