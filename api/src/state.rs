//! Application state shared across Axum route handlers.
//!
//! Everything in here is immutable after startup, so cloning the state per
//! request only bumps reference counts.

use feedback::FeedbackGenerator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    generator: Arc<FeedbackGenerator>,
    expose_error_details: bool,
}

impl AppState {
    /// # Arguments
    ///
    /// * `generator` - The feedback pipeline, with its rubric and text generator already wired in.
    /// * `expose_error_details` - Whether 500 responses include the upstream error text.
    pub fn new(generator: FeedbackGenerator, expose_error_details: bool) -> Self {
        Self {
            generator: Arc::new(generator),
            expose_error_details,
        }
    }

    pub fn generator(&self) -> &FeedbackGenerator {
        &self.generator
    }

    pub fn expose_error_details(&self) -> bool {
        self.expose_error_details
    }
}
