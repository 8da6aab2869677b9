//! Message repository: persistence and queries for the `messages` table.
//!
//! Uses SqlitePoolManager and MessageRecord; the embedded quiz is flattened via QuizColumns.
//! External: SQLite via sqlx; callers use save/list_recent_first/count.

use crate::models::MessageRecord;
use crate::quiz_codec::QuizColumns;
use crate::sqlite_pool::SqlitePoolManager;
use chat_core::Message;
use chrono::Utc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct MessageRepository {
    pool_manager: SqlitePoolManager,
}

impl MessageRepository {
    /// Wraps a shared pool. Call [`MessageRepository::init`] once before use.
    pub fn new(pool_manager: SqlitePoolManager) -> Self {
        Self { pool_manager }
    }

    /// Creates the `messages` table if it does not exist. Safe to call repeatedly.
    pub async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating messages table if not exist");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                content TEXT NOT NULL,
                sender TEXT NOT NULL,
                timestamp TEXT NOT NULL,
                quiz_question TEXT,
                quiz_options TEXT,
                quiz_correct_answer TEXT,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await?;

        Ok(())
    }

    /// Inserts one row and returns its assigned id. A single INSERT, so readers never see a partial row.
    pub async fn save(&self, message: &Message) -> Result<i64, sqlx::Error> {
        let pool = self.pool_manager.pool();
        let quiz = QuizColumns::encode(message.quiz.as_ref());

        let result = sqlx::query(
            r#"
            INSERT INTO messages (content, sender, timestamp, quiz_question, quiz_options, quiz_correct_answer, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&message.content)
        .bind(&message.sender)
        .bind(&message.timestamp)
        .bind(&quiz.question)
        .bind(&quiz.options)
        .bind(&quiz.correct_answer)
        .bind(Utc::now())
        .execute(pool)
        .await?;

        let id = result.last_insert_rowid();
        info!(
            id,
            sender = %message.sender,
            has_quiz = message.quiz.is_some(),
            "Saved message"
        );
        Ok(id)
    }

    /// All rows, newest first. Rows created within the same clock tick fall back to id order.
    pub async fn list_recent_first(&self) -> Result<Vec<MessageRecord>, sqlx::Error> {
        let pool = self.pool_manager.pool();

        let messages = sqlx::query_as::<_, MessageRecord>(
            "SELECT * FROM messages ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(pool)
        .await?;

        debug!("Retrieved {} messages", messages.len());
        Ok(messages)
    }

    #[cfg(test)]
    pub async fn get_by_id(&self, id: i64) -> Result<Option<MessageRecord>, sqlx::Error> {
        sqlx::query_as::<_, MessageRecord>("SELECT * FROM messages WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool_manager.pool())
            .await
    }

    #[cfg(test)]
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM messages")
            .fetch_one(self.pool_manager.pool())
            .await?;
        Ok(total.0)
    }
}
