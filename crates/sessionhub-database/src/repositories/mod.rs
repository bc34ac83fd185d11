//! Identity store implementations.

pub mod memory;
pub mod user;

pub use memory::MemoryIdentityStore;
pub use user::UserRepository;

/// Columns that may carry a unique index. Index DDL is built from these
/// names, so nothing outside this list ever reaches the database.
pub(crate) const UNIQUE_INDEX_FIELDS: &[&str] = &["email"];
