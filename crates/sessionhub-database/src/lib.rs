//! # sessionhub-database
//!
//! PostgreSQL connection management, migrations, and the identity store
//! implementations (PostgreSQL-backed and in-memory).

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{MemoryIdentityStore, UserRepository};
