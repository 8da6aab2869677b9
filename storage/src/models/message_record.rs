//! Message record model for persistence.
//!
//! Maps to the `messages` table and is used by MessageRepository.

use chat_core::Message;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::quiz_codec::QuizColumns;

/// One row of `messages`. The embedded quiz is flattened into the three `quiz_*` columns.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MessageRecord {
    pub id: i64,
    pub content: String,
    pub sender: String,
    pub timestamp: String,
    pub quiz_question: Option<String>,
    pub quiz_options: Option<String>,
    pub quiz_correct_answer: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MessageRecord {
    /// Rebuilds the wire message; the quiz is attached only when `quiz_question` is non-empty.
    pub fn into_message(self) -> Message {
        let quiz = QuizColumns {
            question: self.quiz_question,
            options: self.quiz_options,
            correct_answer: self.quiz_correct_answer,
        }
        .decode();

        Message {
            content: self.content,
            sender: self.sender,
            timestamp: self.timestamp,
            quiz,
        }
    }
}
