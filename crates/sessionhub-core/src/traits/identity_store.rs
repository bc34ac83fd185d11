//! Identity store collaborator trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;

/// Persistence boundary for principals.
///
/// The auth layer only ever reads principals (by id or by normalized email)
/// and inserts new ones. Implementations must enforce uniqueness of the
/// normalized email and report a violation as an error whose kind is
/// [`ErrorKind::Conflict`](crate::error::ErrorKind::Conflict), so callers can
/// tell a duplicate apart from a storage failure.
#[async_trait]
pub trait IdentityStore: Send + Sync + 'static {
    /// The stored principal record.
    type Principal: Clone + Send + Sync + 'static;
    /// The record accepted by [`insert`](Self::insert).
    type NewRecord: Send + Sync + 'static;

    /// Find a principal by primary key. `Ok(None)` means not found.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Self::Principal>>;

    /// Find a principal by its already-normalized (lower-cased) email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Self::Principal>>;

    /// Insert a new principal and return its identifier.
    async fn insert(&self, record: &Self::NewRecord) -> AppResult<Uuid>;

    /// Ensure a unique index exists on the given field. Idempotent.
    async fn ensure_unique_index(&self, field: &str) -> AppResult<()>;
}
