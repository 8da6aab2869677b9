//! # Store chain
//!
//! Wraps a [`MessageStore`] with a sequence of middleware. For every store call the middleware
//! `before` hooks run in order (any error aborts the call), then the inner store runs, then the `after`
//! hooks run in reverse order with the outcome. An `after` error is logged and never replaces the
//! store's result, since the write has already happened by then. The chain is itself a
//! [`MessageStore`].

use async_trait::async_trait;
use chat_core::{
    AnswerResult, CallOutcome, Message, MessageStore, Middleware, Result, StoreCall, StoredQuiz,
};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

#[derive(Clone)]
pub struct StoreChain {
    inner: Arc<dyn MessageStore>,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl StoreChain {
    /// Creates a chain with no middleware around `inner`.
    pub fn new(inner: Arc<dyn MessageStore>) -> Self {
        Self {
            inner,
            middleware: Vec::new(),
        }
    }

    /// Appends a middleware (before runs in insertion order, after in reverse).
    pub fn add_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
        self.middleware.push(middleware);
        self
    }

    async fn run_before(&self, call: &StoreCall<'_>) -> Result<()> {
        for mw in &self.middleware {
            let mw_name = std::any::type_name_of_val(mw.as_ref());
            debug!(operation = call.name(), middleware = %mw_name, "step: middleware before");
            mw.before(call).await?;
        }
        Ok(())
    }

    async fn run_after(&self, call: &StoreCall<'_>, outcome: &CallOutcome) {
        for mw in self.middleware.iter().rev() {
            let mw_name = std::any::type_name_of_val(mw.as_ref());
            debug!(operation = call.name(), middleware = %mw_name, "step: middleware after");
            if let Err(e) = mw.after(call, outcome).await {
                warn!(
                    operation = call.name(),
                    middleware = %mw_name,
                    error = %e,
                    "middleware after failed"
                );
            }
        }
    }
}

fn outcome_of<T>(result: &Result<T>, on_ok: impl FnOnce(&T) -> CallOutcome) -> CallOutcome {
    match result {
        Ok(value) => on_ok(value),
        Err(e) => CallOutcome::Failed(e.to_string()),
    }
}

#[async_trait]
impl MessageStore for StoreChain {
    #[instrument(skip(self, message))]
    async fn create_message(&self, message: &Message) -> Result<()> {
        let call = StoreCall::CreateMessage { message, system: false };
        self.run_before(&call).await?;
        let result = self.inner.create_message(message).await;
        self.run_after(&call, &outcome_of(&result, |_| CallOutcome::Sent))
            .await;
        result
    }

    #[instrument(skip(self, message))]
    async fn create_system_message(&self, message: &Message) -> Result<()> {
        let call = StoreCall::CreateMessage { message, system: true };
        self.run_before(&call).await?;
        let result = self.inner.create_system_message(message).await;
        self.run_after(&call, &outcome_of(&result, |_| CallOutcome::Sent))
            .await;
        result
    }

    #[instrument(skip(self))]
    async fn list_messages(&self) -> Result<Vec<Message>> {
        let call = StoreCall::ListMessages;
        self.run_before(&call).await?;
        let result = self.inner.list_messages().await;
        self.run_after(
            &call,
            &outcome_of(&result, |messages| CallOutcome::Listed {
                count: messages.len(),
            }),
        )
        .await;
        result
    }

    #[instrument(skip(self, answer))]
    async fn answer_quiz(&self, quiz_id: i64, answer: &str) -> Result<AnswerResult> {
        let call = StoreCall::AnswerQuiz { quiz_id, answer };
        self.run_before(&call).await?;
        let result = self.inner.answer_quiz(quiz_id, answer).await;
        self.run_after(&call, &outcome_of(&result, |r| CallOutcome::Answered(*r)))
            .await;
        result
    }

    #[instrument(skip(self, question, answer))]
    async fn create_quiz(&self, question: &str, answer: &str) -> Result<StoredQuiz> {
        let call = StoreCall::CreateQuiz { question };
        self.run_before(&call).await?;
        let result = self.inner.create_quiz(question, answer).await;
        self.run_after(
            &call,
            &outcome_of(&result, |quiz| CallOutcome::QuizCreated { id: quiz.id }),
        )
        .await;
        result
    }
}

// Tests live in tests/store_chain_test.rs
