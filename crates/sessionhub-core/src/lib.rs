//! # sessionhub-core
//!
//! Core crate for SessionHub. Contains the configuration schema, the
//! identity-store collaborator trait, the JSON response envelope, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other SessionHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
