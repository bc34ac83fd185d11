//! Custom Axum extractors.

pub mod auth;
pub mod validated;

pub use auth::CurrentUser;
pub use validated::ValidatedJson;
