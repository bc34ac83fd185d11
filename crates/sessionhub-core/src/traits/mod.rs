//! Core traits defined in `sessionhub-core` and implemented by other crates.

pub mod identity_store;

pub use identity_store::IdentityStore;
