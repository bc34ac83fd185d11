//! Core type definitions used across the SessionHub workspace.

pub mod response;

pub use response::{ApiStatus, StatusResponse};
