//! Store error model.

use thiserror::Error;

/// Result type used across the persistence gateway.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure raised by the persistence gateway.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying database rejected or failed an operation.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A persisted timestamp column could not be decoded.
    #[error("invalid stored timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
}
