//! Quiz repository: the standalone `quizzes` table used for answer checking.

use crate::models::QuizRecord;
use crate::sqlite_pool::SqlitePoolManager;
use chrono::Utc;
use tracing::info;

#[derive(Clone)]
pub struct QuizRepository {
    pool_manager: SqlitePoolManager,
}

impl QuizRepository {
    pub fn new(pool_manager: SqlitePoolManager) -> Self {
        Self { pool_manager }
    }

    /// Creates the `quizzes` table if it does not exist.
    pub async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating quizzes table if not exist");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS quizzes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await?;

        Ok(())
    }

    pub async fn save(&self, question: &str, answer: &str) -> Result<QuizRecord, sqlx::Error> {
        let created_at = Utc::now();
        let result = sqlx::query("INSERT INTO quizzes (question, answer, created_at) VALUES (?, ?, ?)")
            .bind(question)
            .bind(answer)
            .bind(created_at)
            .execute(self.pool_manager.pool())
            .await?;

        let record = QuizRecord {
            id: result.last_insert_rowid(),
            question: question.to_string(),
            answer: answer.to_string(),
            created_at,
        };
        info!(id = record.id, "Saved quiz");
        Ok(record)
    }

    /// The stored answer of quiz `id`, or `None` if no such row exists.
    pub async fn find_answer(&self, id: i64) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(String,)> = sqlx::query_as("SELECT answer FROM quizzes WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool_manager.pool())
            .await?;
        Ok(row.map(|r| r.0))
    }
}
