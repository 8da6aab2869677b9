//! Storage crate: message and quiz persistence over SQLite.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – MessageRecord, QuizRecord
//! - [`quiz_codec`] – flat-column encoding of a message's embedded quiz
//! - [`message_repo`] – MessageRepository (`messages` table)
//! - [`quiz_repo`] – QuizRepository (`quizzes` table)
//! - [`sqlite_pool`] – SqlitePoolManager
//! - [`store`] – SqliteMessageStore, the `chat_core::MessageStore` implementation

mod error;
mod message_repo;
mod models;
mod quiz_codec;
mod quiz_repo;
mod sqlite_pool;
mod store;


pub use error::StorageError;
pub use message_repo::MessageRepository;
pub use models::{MessageRecord, QuizRecord};
pub use quiz_codec::{decode_options, encode_options, QuizColumns, OPTION_SEPARATOR};
pub use quiz_repo::QuizRepository;
pub use sqlite_pool::{SqlitePoolManager, DEFAULT_MAX_CONNECTIONS};
pub use store::SqliteMessageStore;
