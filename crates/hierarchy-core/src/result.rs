//! Convenience result type alias.

use crate::error::AppError;

/// A specialized `Result` type for hierarchy operations that cross the
/// application boundary.
pub type AppResult<T> = Result<T, AppError>;
