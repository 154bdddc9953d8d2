//! Storage error types.
//!
//! Used by the repository and callers of storage APIs. A failure here is
//! fatal for the single operation that hit it, never for the process.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StorageError::NotFound(err.to_string()),
            other => StorageError::Database(other.to_string()),
        }
    }
}
