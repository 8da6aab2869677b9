//! SQLite-backed [`MessageStore`].
//!
//! Opens one shared pool, creates both tables, and routes operations to MessageRepository and
//! QuizRepository. Validation happens here so every caller gets the same checks.

use async_trait::async_trait;
use chat_core::types::require_non_blank;
use chat_core::{AnswerResult, ChatError, Message, MessageStore, Result, StoredQuiz};
use tracing::{info, instrument, warn};

use crate::error::StorageError;
use crate::message_repo::MessageRepository;
use crate::quiz_codec::options_with_separator;
use crate::quiz_repo::QuizRepository;
use crate::sqlite_pool::{SqlitePoolManager, DEFAULT_MAX_CONNECTIONS};

#[derive(Clone)]
pub struct SqliteMessageStore {
    messages: MessageRepository,
    quizzes: QuizRepository,
}

impl SqliteMessageStore {
    /// Opens (creating if missing) the database at `database_url` and ensures the schema exists.
    pub async fn open(database_url: &str) -> std::result::Result<Self, StorageError> {
        Self::open_with_max_connections(database_url, DEFAULT_MAX_CONNECTIONS).await
    }

    pub async fn open_with_max_connections(
        database_url: &str,
        max_connections: u32,
    ) -> std::result::Result<Self, StorageError> {
        let pool_manager =
            SqlitePoolManager::with_max_connections(database_url, max_connections).await?;
        Self::from_pool(pool_manager).await
    }

    /// Builds the store on an existing pool and runs idempotent schema creation.
    pub async fn from_pool(pool_manager: SqlitePoolManager) -> std::result::Result<Self, StorageError> {
        let store = Self {
            messages: MessageRepository::new(pool_manager.clone()),
            quizzes: QuizRepository::new(pool_manager),
        };
        store.messages.init().await?;
        store.quizzes.init().await?;
        info!("Database tables ready");
        Ok(store)
    }
}

#[async_trait]
impl MessageStore for SqliteMessageStore {
    #[instrument(skip(self, message), fields(sender = %message.sender))]
    async fn create_message(&self, message: &Message) -> Result<()> {
        message.validate()?;

        if let Some(quiz) = &message.quiz {
            let corrupted = options_with_separator(&quiz.options);
            if !corrupted.is_empty() {
                warn!(
                    options = ?corrupted,
                    "quiz options contain ',' and will be split into extra options when read back"
                );
            }
        }

        self.messages
            .save(message)
            .await
            .map_err(StorageError::from)?;
        Ok(())
    }

    #[instrument(skip(self, message), fields(sender = %message.sender))]
    async fn create_system_message(&self, message: &Message) -> Result<()> {
        info!(system = true, "system flag accepted; not persisted");
        self.create_message(message).await
    }

    #[instrument(skip(self))]
    async fn list_messages(&self) -> Result<Vec<Message>> {
        let records = self
            .messages
            .list_recent_first()
            .await
            .map_err(StorageError::from)?;
        Ok(records.into_iter().map(|r| r.into_message()).collect())
    }

    #[instrument(skip(self, answer))]
    async fn answer_quiz(&self, quiz_id: i64, answer: &str) -> Result<AnswerResult> {
        let expected = self
            .quizzes
            .find_answer(quiz_id)
            .await
            .map_err(StorageError::from)?
            .ok_or_else(|| ChatError::NotFound("Quiz not found".to_string()))?;

        let result = AnswerResult::check(&expected, answer);
        info!(quiz_id, result = %result, "Checked quiz answer");
        Ok(result)
    }

    #[instrument(skip(self, answer))]
    async fn create_quiz(&self, question: &str, answer: &str) -> Result<StoredQuiz> {
        require_non_blank("question", question)?;
        require_non_blank("answer", answer)?;

        let record = self
            .quizzes
            .save(question, answer)
            .await
            .map_err(StorageError::from)?;
        Ok(record.into())
    }
}
