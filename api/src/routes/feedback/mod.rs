//! Feedback routes.
//!
//! # Endpoints
//! - POST `/feedback` – Generate a feedback paragraph for one game result.

use axum::{Router, routing::post};

use crate::state::AppState;

mod common;
mod post;

pub use common::{FeedbackRequestBody, NumberLike};
pub use post::create_feedback;

/// Registers the feedback routes on a `Router<AppState>`.
pub fn feedback_routes() -> Router<AppState> {
    Router::new().route("/", post(create_feedback))
}
