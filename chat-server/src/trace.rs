//! Request trace middleware: wraps every request in an `http_request` span, logs small JSON bodies,
//! and echoes the trace id back in `x-trace-id`. Observes only; never changes the payload.
//!
//! Request bodies are read at most [`MAX_REQUEST_BODY`] bytes; larger ones are answered with
//! 413 before any handler runs.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use std::time::Instant;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::error::ApiError;

pub static X_TRACE_ID: &str = "x-trace-id";

/// Same as axum's default `DefaultBodyLimit`.
pub const MAX_REQUEST_BODY: usize = 2 * 1024 * 1024;

/// Bodies larger than this are summarized instead of logged.
const MAX_LOGGED_BODY: usize = 1024;

pub async fn trace_middleware(req: Request, next: Next) -> Response {
    let start_time = Instant::now();

    let trace_id = req
        .headers()
        .get(X_TRACE_ID)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4);

    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let span = info_span!(
        "http_request",
        trace_id = %trace_id,
        method = %method,
        path = %path,
    );

    async move {
        info!("→ request started");
        let (parts, body) = req.into_parts();

        let response = match read_body("request", &parts.headers, body, MAX_REQUEST_BODY).await {
            Ok(req_bytes) => next.run(Request::from_parts(parts, Body::from(req_bytes))).await,
            Err(rejection) => rejection.into_response(),
        };

        let (parts, body) = response.into_parts();
        let res_bytes = read_body("response", &parts.headers, body, usize::MAX)
            .await
            .unwrap_or_default();
        let mut response = Response::from_parts(parts, Body::from(res_bytes));

        if let Ok(value) = HeaderValue::from_str(&trace_id.to_string()) {
            response.headers_mut().insert(X_TRACE_ID, value);
        }

        info!(
            status = response.status().as_u16(),
            latency_ms = start_time.elapsed().as_millis() as u64,
            "← response finished"
        );

        response
    }
    .instrument(span)
    .await
}

/// Buffers at most `limit` bytes of `body` and logs it when it is small JSON.
async fn read_body(
    direction: &str,
    headers: &header::HeaderMap,
    body: Body,
    limit: usize,
) -> Result<Bytes, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let is_json = content_type.contains("application/json");

    let bytes = match Limited::new(body, limit).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) if e.is::<LengthLimitError>() => {
            warn!(limit, "{} body exceeds limit", direction);
            return Err(ApiError::Rejected {
                status: StatusCode::PAYLOAD_TOO_LARGE,
                detail: format!("request body exceeds {} bytes", limit),
            });
        }
        Err(e) => {
            warn!(error = %e, "{} body could not be read", direction);
            return Err(ApiError::BadRequest("request body could not be read".to_string()));
        }
    };

    if is_json && bytes.len() < MAX_LOGGED_BODY {
        if let Ok(text) = std::str::from_utf8(&bytes) {
            info!("{} body: {}", direction, text);
        }
    } else if !bytes.is_empty() {
        info!(
            "{} body: [skipped: type={}, size={}]",
            direction,
            content_type,
            bytes.len()
        );
    }

    Ok(bytes)
}
