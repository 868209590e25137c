//! Error types for the storage layer.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Serialization/deserialization error of a stored payload.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Link list not found.
    #[error("link list not found: {0}")]
    NotFound(String),

    /// A stored row could not be turned back into a link list.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A thread panicked while holding the connection.
    #[error("storage lock poisoned")]
    LockPoisoned,
}
