//! Convenience result type alias for SessionHub.

use crate::error::AppError;

/// A specialized `Result` type for SessionHub operations.
pub type AppResult<T> = Result<T, AppError>;
