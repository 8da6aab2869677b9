use async_trait::async_trait;
use chat_core::{CallOutcome, Middleware, Result, StoreCall};
use tracing::{debug, info, instrument, warn};

/// Logs each store call in before() and its outcome in after(); never blocks a call.
pub struct LoggingMiddleware;

#[async_trait]
impl Middleware for LoggingMiddleware {
    #[instrument(skip(self, call))]
    async fn before(&self, call: &StoreCall<'_>) -> Result<()> {
        match call {
            StoreCall::CreateMessage { message, system } => info!(
                operation = call.name(),
                sender = %message.sender,
                timestamp = %message.timestamp,
                content_len = message.content.len(),
                has_quiz = message.quiz.is_some(),
                system = *system,
                "Store call"
            ),
            StoreCall::ListMessages => info!(operation = call.name(), "Store call"),
            StoreCall::AnswerQuiz { quiz_id, .. } => {
                info!(operation = call.name(), quiz_id = *quiz_id, "Store call")
            }
            StoreCall::CreateQuiz { question } => {
                info!(operation = call.name(), question = %question, "Store call")
            }
        }
        Ok(())
    }

    #[instrument(skip(self, call, outcome))]
    async fn after(&self, call: &StoreCall<'_>, outcome: &CallOutcome) -> Result<()> {
        match outcome {
            CallOutcome::Failed(error) => {
                warn!(operation = call.name(), error = %error, "Store call failed")
            }
            _ => debug!(operation = call.name(), outcome = ?outcome, "Store call done"),
        }
        Ok(())
    }
}
