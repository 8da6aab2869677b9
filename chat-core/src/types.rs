//! Core types: message and embedded quiz, answer classification, standalone quiz, and the store Middleware trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Question attached to a message. `options` keep their display order; `correct_answer`
/// should be one of `options` but that is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

/// A chat entry as sent and received by clients. `timestamp` is opaque to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub content: String,
    pub sender: String,
    pub timestamp: String,
    /// Omitted from the serialized form when absent (never emitted as `null`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Quiz>,
}

impl Message {
    /// Creates a message without a quiz.
    pub fn new(
        content: impl Into<String>,
        sender: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            sender: sender.into(),
            timestamp: timestamp.into(),
            quiz: None,
        }
    }

    /// Attaches a quiz.
    pub fn with_quiz(mut self, quiz: Quiz) -> Self {
        self.quiz = Some(quiz);
        self
    }

    /// Checks required fields: content, sender, timestamp and (if attached) the quiz question must be non-blank.
    pub fn validate(&self) -> crate::error::Result<()> {
        require_non_blank("content", &self.content)?;
        require_non_blank("sender", &self.sender)?;
        require_non_blank("timestamp", &self.timestamp)?;
        if let Some(quiz) = &self.quiz {
            require_non_blank("quiz.question", &quiz.question)?;
        }
        Ok(())
    }
}

/// Returns `ChatError::Validation` naming `field` when `value` is empty or whitespace only.
pub fn require_non_blank(field: &str, value: &str) -> crate::error::Result<()> {
    if value.trim().is_empty() {
        return Err(crate::error::ChatError::Validation(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(())
}

/// Result of checking an answer against a standalone quiz (exact, case-sensitive match).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerResult {
    Correct,
    Incorrect,
}

impl AnswerResult {
    /// Compares byte-for-byte: no trimming, no case folding.
    pub fn check(expected: &str, given: &str) -> Self {
        if expected == given {
            AnswerResult::Correct
        } else {
            AnswerResult::Incorrect
        }
    }
}

impl fmt::Display for AnswerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerResult::Correct => f.write_str("Correct"),
            AnswerResult::Incorrect => f.write_str("Incorrect"),
        }
    }
}

/// Independently stored question/answer pair, referenced only by id. Unrelated to a message's embedded quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredQuiz {
    pub id: i64,
    pub question: String,
    pub answer: String,
}

/// A store operation as seen by middleware.
#[derive(Debug, Clone)]
pub enum StoreCall<'a> {
    /// `system` is accepted from `create_system_message` but is never persisted.
    CreateMessage { message: &'a Message, system: bool },
    ListMessages,
    AnswerQuiz { quiz_id: i64, answer: &'a str },
    CreateQuiz { question: &'a str },
}

impl StoreCall<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            StoreCall::CreateMessage { system: false, .. } => "create_message",
            StoreCall::CreateMessage { system: true, .. } => "create_system_message",
            StoreCall::ListMessages => "list_messages",
            StoreCall::AnswerQuiz { .. } => "answer_quiz",
            StoreCall::CreateQuiz { .. } => "create_quiz",
        }
    }
}

/// Outcome of a store operation, passed to middleware `after`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    Sent,
    Listed { count: usize },
    Answered(AnswerResult),
    QuizCreated { id: i64 },
    /// The operation returned an error; carries its display text.
    Failed(String),
}

/// Interceptor around store calls. `before` runs in registration order and may abort the call with an
/// error; `after` runs in reverse order with the outcome. Must not alter the data model.
#[async_trait]
pub trait Middleware: Send + Sync {
    async fn before(&self, _call: &StoreCall<'_>) -> crate::error::Result<()> {
        Ok(())
    }

    async fn after(&self, _call: &StoreCall<'_>, _outcome: &CallOutcome) -> crate::error::Result<()> {
        Ok(())
    }
}
