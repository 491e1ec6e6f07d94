//! Storage error taxonomy shared by all repository implementations.

use thiserror::Error;

/// Column whose unique constraint rejected an insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueColumn {
    OriginalUrl,
    ShortCode,
    /// The backend reported a unique violation without naming the column.
    Unknown,
}

/// Errors returned by repository operations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    #[error("unique constraint violated on {0:?}")]
    UniqueViolation(UniqueColumn),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage query failed: {0}")]
    Query(String),
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
