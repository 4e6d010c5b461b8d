//! HTTP route entry point.
//!
//! Route groups:
//! - `/health` → Liveness probe (no external calls)
//! - `/feedback` → AI feedback generation

use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    middleware::from_fn,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::middleware::log_request;
use crate::routes::{feedback::feedback_routes, health::health_routes};
use crate::state::AppState;

pub mod feedback;
pub mod health;

/// Builds the route tree with `AppState` applied.
///
/// # Route Structure:
/// - `/health` → Health check endpoint.
/// - `/feedback` → `POST` feedback generation.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/feedback", feedback_routes())
        .with_state(app_state)
}

/// Builds the complete application: routes, request logging and CORS.
pub fn build_app(app_state: AppState, allowed_origins: &[String]) -> Router {
    routes(app_state)
        .layer(from_fn(log_request))
        .layer(cors_layer(allowed_origins))
}

/// CORS policy: the configured origin allow-list, `GET`/`POST`/`OPTIONS`, and
/// the `Content-Type` and `Authorization` request headers.
///
/// A literal `*` in the list allows any origin.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}
