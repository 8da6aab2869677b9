//! Standalone quiz record model.
//!
//! Maps to the `quizzes` table and is used by QuizRepository. Not linked to any message row.

use chat_core::StoredQuiz;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct QuizRecord {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

impl From<QuizRecord> for StoredQuiz {
    fn from(record: QuizRecord) -> Self {
        StoredQuiz {
            id: record.id,
            question: record.question,
            answer: record.answer,
        }
    }
}
