//! Convenience result type alias for BoothDesk.

use crate::error::AppError;

/// A specialized `Result` type for BoothDesk operations.
pub type AppResult<T> = Result<T, AppError>;
