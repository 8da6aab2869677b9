use thiserror::Error;

/// Error kinds produced by a [`crate::MessageStore`]. Callers map them to transport status codes.
#[derive(Error, Debug)]
pub enum ChatError {
    /// Missing or blank request fields.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A referenced entity (e.g. a standalone quiz id) does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The underlying persistence layer failed; nothing was partially written.
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, ChatError>;
