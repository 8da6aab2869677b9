//! API error type.
//!
//! Every handler returns `Result<T, ApiError>`, which implements [`IntoResponse`] so store errors and
//! extractor rejections become a JSON `{"detail": ...}` body with a stable status code:
//! validation and malformed input → 400, unknown quiz → 404, storage failure → 500.
//! Rejections that are not about the payload's shape (body too large, wrong content type) keep
//! their own status.
//! Storage details are logged but never sent to the caller.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chat_core::ChatError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Propagated from the message store.
    #[error(transparent)]
    Store(#[from] ChatError),

    /// The request body or path could not be parsed.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Rejected before reaching the store with a specific status (413, 415, ...).
    #[error("rejected ({status}): {detail}")]
    Rejected { status: StatusCode, detail: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(ChatError::Validation(_)) | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Store(ChatError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(ChatError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Rejected { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ApiError::Store(ChatError::Validation(m)) | ApiError::BadRequest(m) => {
                warn!(detail = %m, "rejected request");
                m.clone()
            }
            ApiError::Store(ChatError::NotFound(m)) => m.clone(),
            ApiError::Rejected { detail, .. } => {
                warn!(status = status.as_u16(), detail = %detail, "rejected request");
                detail.clone()
            }
            ApiError::Store(ChatError::Storage(e)) => {
                error!(error = %e, "storage error");
                "internal server error".to_owned()
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                ApiError::BadRequest(rejection.body_text())
            }
            _ => ApiError::Rejected {
                status: rejection.status(),
                detail: rejection.body_text(),
            },
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(ChatError::Validation("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ChatError::NotFound("Quiz not found".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(ChatError::Storage("disk full".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::BadRequest("bad json".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Rejected {
                status: StatusCode::PAYLOAD_TOO_LARGE,
                detail: "too large".into(),
            }
            .status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }
}
