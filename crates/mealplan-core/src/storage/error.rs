//! Storage error types

use thiserror::Error;

/// Storage error type
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQLite error
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// IO error (creating the database directory)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
