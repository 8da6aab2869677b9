//! Storage error types.
//!
//! Used by repository implementations; converted to [`chat_core::ChatError`] at the store boundary.

use chat_core::ChatError;
use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<StorageError> for ChatError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::Database(e) => ChatError::Storage(e.to_string()),
            StorageError::NotFound(m) => ChatError::NotFound(m),
        }
    }
}
