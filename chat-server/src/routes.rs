//! HTTP routes. Each handler validates request shape and delegates to the store.
//!
//! | Method & path | Store call |
//! |---|---|
//! | `POST /messages` | `create_message` |
//! | `GET /messages` | `list_messages` |
//! | `POST /quizzes/{quiz_id}/answer` | `answer_quiz` |
//! | `POST /system-messages` | `create_system_message` |

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chat_core::Message;

use crate::error::ApiError;
use crate::schemas::{AnswerResponse, QuizAnswer, SendResponse};
use crate::state::AppState;
use crate::trace::trace_middleware;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/messages", get(list_messages).post(send_message))
        .route("/quizzes/{quiz_id}/answer", post(answer_quiz))
        .route("/system-messages", post(send_system_message))
        .layer(axum::middleware::from_fn(trace_middleware))
        .with_state(state)
}

pub async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<Message>, JsonRejection>,
) -> Result<Json<SendResponse>, ApiError> {
    let Json(message) = payload?;
    state.store.create_message(&message).await?;
    Ok(Json(SendResponse::sent()))
}

pub async fn list_messages(State(state): State<AppState>) -> Result<Json<Vec<Message>>, ApiError> {
    Ok(Json(state.store.list_messages().await?))
}

pub async fn answer_quiz(
    State(state): State<AppState>,
    quiz_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<QuizAnswer>, JsonRejection>,
) -> Result<Json<AnswerResponse>, ApiError> {
    let Path(quiz_id) = quiz_id?;
    let Json(body) = payload?;
    let result = state.store.answer_quiz(quiz_id, &body.answer).await?;
    Ok(Json(AnswerResponse { result }))
}

pub async fn send_system_message(
    State(state): State<AppState>,
    payload: Result<Json<Message>, JsonRejection>,
) -> Result<Json<SendResponse>, ApiError> {
    let Json(message) = payload?;
    state.store.create_system_message(&message).await?;
    Ok(Json(SendResponse::sent()))
}
