//! Message store abstraction.
//!
//! [`MessageStore`] is transport-agnostic; `storage::SqliteMessageStore` implements it over SQLite and
//! `store_chain::StoreChain` wraps any implementation with middleware.

use crate::error::Result;
use crate::types::{AnswerResult, Message, StoredQuiz};
use async_trait::async_trait;

/// Append-only persistence for messages (with optional embedded quiz) and standalone quizzes.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Validates and appends one message. The insert is atomic.
    async fn create_message(&self, message: &Message) -> Result<()>;

    /// Same as [`MessageStore::create_message`]; the system-origin flag is accepted but not stored.
    async fn create_system_message(&self, message: &Message) -> Result<()>;

    /// All messages, newest first. Messages without a quiz have `quiz: None`.
    async fn list_messages(&self) -> Result<Vec<Message>>;

    /// Compares `answer` with the stored answer of quiz `quiz_id`.
    /// Returns `ChatError::NotFound` (not `Incorrect`) when no such quiz exists.
    async fn answer_quiz(&self, quiz_id: i64, answer: &str) -> Result<AnswerResult>;

    /// Appends a standalone quiz and returns it with its assigned id.
    async fn create_quiz(&self, question: &str, answer: &str) -> Result<StoredQuiz>;
}
