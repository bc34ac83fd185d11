//! User self-service handlers.

use axum::Json;

use crate::dto::response::{DataResponse, UserEnvelope};
use crate::extractors::CurrentUser;

/// GET /api/users/me
pub async fn me(CurrentUser(user): CurrentUser) -> Json<DataResponse<UserEnvelope>> {
    Json(DataResponse::from(&user))
}
