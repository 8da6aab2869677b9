//! Request and response bodies of the HTTP API.

use chat_core::AnswerResult;
use serde::{Deserialize, Serialize};

pub const MESSAGE_SENT: &str = "Message sent successfully";

/// Body of `POST /quizzes/{quiz_id}/answer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub answer: String,
}

/// Response of `POST /messages` and `POST /system-messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResponse {
    pub message: String,
}

impl SendResponse {
    pub fn sent() -> Self {
        Self {
            message: MESSAGE_SENT.to_string(),
        }
    }
}

/// Response of `POST /quizzes/{quiz_id}/answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub result: AnswerResult,
}
