//! In-memory identity store for tests and single-node runs.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use sessionhub_core::error::AppError;
use sessionhub_core::result::AppResult;
use sessionhub_core::traits::IdentityStore;
use sessionhub_entity::user::{CreateUser, User};

use super::UNIQUE_INDEX_FIELDS;

/// Identity store backed by concurrent hash maps.
///
/// Email uniqueness is always enforced: the email index entry is claimed
/// before the user row becomes visible, so two concurrent inserts of the
/// same address cannot both succeed.
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    users: DashMap<Uuid, User>,
    emails: DashMap<String, Uuid>,
}

impl MemoryIdentityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a user, as an account deletion outside the auth flow would.
    pub fn remove(&self, id: Uuid) -> Option<User> {
        let (_, user) = self.users.remove(&id)?;
        self.emails.remove(&user.email);
        Some(user)
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl IdentityStore for MemoryIdentityStore {
    type Principal = User;
    type NewRecord = CreateUser;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let Some(id) = self.emails.get(email).map(|entry| *entry.value()) else {
            return Ok(None);
        };
        self.find_by_id(id).await
    }

    async fn insert(&self, record: &CreateUser) -> AppResult<Uuid> {
        match self.emails.entry(record.email.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict("User with this email already exists")),
            Entry::Vacant(slot) => {
                self.users.insert(record.id, record.clone().into_user());
                slot.insert(record.id);
                Ok(record.id)
            }
        }
    }

    async fn ensure_unique_index(&self, field: &str) -> AppResult<()> {
        if UNIQUE_INDEX_FIELDS.contains(&field) {
            Ok(())
        } else {
            Err(AppError::validation(format!(
                "Unique index not supported on field '{field}'"
            )))
        }
    }
}
