//! JSON response bodies and error mapping.
//!
//! Successful feedback responses look like:
//! ```json
//! { "feedback": "Kerja bagus di game WordHunt! ..." }
//! ```
//!
//! Every failure uses the same shape, with `details` only present for upstream
//! failures when the deployment allows it:
//! ```json
//! { "error": "Gagal membuat feedback AI", "details": "Gemini returned 429: ..." }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use feedback::FeedbackError;
use serde::Serialize;

/// Message returned to clients when the external generation call fails.
pub const UPSTREAM_ERROR_MESSAGE: &str = "Gagal membuat feedback AI";

#[derive(Debug, Serialize)]
pub struct FeedbackBody {
    pub feedback: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

/// Errors a handler can end in, each mapped to one status code.
#[derive(Debug)]
pub enum ApiError {
    /// 400: the request body is missing a required field or is malformed.
    Validation(String),
    /// 404: the `(level, score)` pair is not covered by the rubric.
    RubricMiss { level: i64, score: i64 },
    /// 500: the external generation call failed.
    Upstream { details: Option<String> },
}

impl ApiError {
    /// Maps a pipeline error, keeping upstream details only if `expose_details` is set.
    pub fn from_feedback(err: FeedbackError, expose_details: bool) -> Self {
        match err {
            FeedbackError::RubricMiss { level, score } => ApiError::RubricMiss { level, score },
            FeedbackError::Upstream(e) => ApiError::Upstream {
                details: expose_details.then(|| e.to_string()),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::RubricMiss { .. } => StatusCode::NOT_FOUND,
            ApiError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation(message) => ErrorBody::new(message),
            ApiError::RubricMiss { level, score } => ErrorBody::new(
                FeedbackError::RubricMiss { level, score }.to_string(),
            ),
            ApiError::Upstream { details } => ErrorBody {
                error: UPSTREAM_ERROR_MESSAGE.into(),
                details,
            },
        };
        (status, Json(body)).into_response()
    }
}
