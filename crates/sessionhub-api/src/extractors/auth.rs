//! `CurrentUser` extractor: the principal attached by `require_auth`.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use sessionhub_auth::AuthError;
use sessionhub_entity::user::User;

use crate::error::ApiError;

/// The authenticated caller of a protected route.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl std::ops::Deref for CurrentUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Only present on routes behind `require_auth`.
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| AuthError::NoCredential.into())
    }
}
