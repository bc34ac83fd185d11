//! Resolves a presented access token to the user it was issued for.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use sessionhub_entity::user::User;

use crate::UserStore;
use crate::error::AuthError;
use crate::jwt::{KeyMaterial, TokenCodec};

/// Verifies access tokens and loads their subject from the identity store.
///
/// Every rejection is terminal for the request. Nothing is retried here.
#[derive(Clone)]
pub struct IdentityResolver {
    codec: TokenCodec,
    keys: Arc<KeyMaterial>,
    store: Arc<UserStore>,
}

impl std::fmt::Debug for IdentityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityResolver")
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

impl IdentityResolver {
    /// Creates a resolver over shared key material and store.
    pub fn new(codec: TokenCodec, keys: Arc<KeyMaterial>, store: Arc<UserStore>) -> Self {
        Self { codec, keys, store }
    }

    /// Resolves the credential found on a request, if any.
    pub async fn resolve(&self, credential: Option<&str>) -> Result<User, AuthError> {
        let token = credential.ok_or(AuthError::NoCredential)?;

        let claims = self
            .codec
            .verify(token, &self.keys.access().verifying)
            .map_err(|e| {
                debug!(reason = %e, "Rejected access token");
                AuthError::Token(e)
            })?;

        let Ok(user_id) = Uuid::parse_str(claims.subject()) else {
            warn!(sub = %claims.sub, "Access token subject is not a user id");
            return Err(AuthError::PrincipalGone);
        };

        match self.store.find_by_id(user_id).await? {
            Some(user) => Ok(user),
            None => {
                debug!(user_id = %user_id, "Access token refers to a deleted user");
                Err(AuthError::PrincipalGone)
            }
        }
    }
}
