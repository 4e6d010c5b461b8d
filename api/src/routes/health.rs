use axum::{Json, Router, response::IntoResponse, routing::get};
use serde_json::json;

/// Builds the `/health` route group.
///
/// A single `GET /health` endpoint for uptime checks and load balancers. It
/// does not call the text-generation service.
pub fn health_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// { "status": "ok" }
/// ```
async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
