//! # Feedback Generator
//!
//! Runs one request through the pipeline: rubric lookup, prompt construction,
//! the external generation call, fallback on an empty reply, and sanitization.
//!
//! The generator holds no mutable state. It is shared across requests behind an
//! `Arc`, and the rubric and text generator are injected so that tests can use
//! their own.

use crate::error::FeedbackError;
use crate::prompt::build_prompt;
use crate::rubric::RubricTable;
use crate::sanitize::clean_feedback;
use crate::traits::generator::TextGenerator;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Returned when the model's reply carries no text.
pub const FALLBACK_FEEDBACK: &str = "Tidak ada feedback yang dihasilkan.";

/// A validated feedback request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRequest {
    pub level: i64,
    pub score: i64,
    pub game: String,
    /// Optional note from the teacher (or the student, see `user_role`).
    pub note: Option<String>,
    pub user_role: Option<String>,
}

pub struct FeedbackGenerator {
    rubric: Arc<RubricTable>,
    text_generator: Arc<dyn TextGenerator>,
    max_chars: usize,
}

impl FeedbackGenerator {
    pub fn new(
        rubric: Arc<RubricTable>,
        text_generator: Arc<dyn TextGenerator>,
        max_chars: usize,
    ) -> Self {
        Self {
            rubric,
            text_generator,
            max_chars,
        }
    }

    /// The rubric this generator looks entries up in.
    pub fn rubric(&self) -> &RubricTable {
        &self.rubric
    }

    /// Produces sanitized feedback for `request`.
    ///
    /// # Returns
    /// - `Ok(String)`: the cleaned paragraph, or the cleaned [`FALLBACK_FEEDBACK`]
    ///   if the model returned nothing.
    /// - `Err(FeedbackError::RubricMiss)`: the pair is not covered. No external
    ///   call is made.
    /// - `Err(FeedbackError::Upstream)`: the external call failed.
    pub async fn generate(&self, request: &FeedbackRequest) -> Result<String, FeedbackError> {
        let entry = self
            .rubric
            .lookup(request.level, request.score)
            .map_err(|_| FeedbackError::RubricMiss {
                level: request.level,
                score: request.score,
            })?;

        let prompt = build_prompt(request, entry);
        debug!(
            level = request.level,
            score = request.score,
            game = %request.game,
            category = %entry.category,
            prompt_len = prompt.len(),
            "Requesting AI feedback"
        );

        let raw = match self.text_generator.generate_text(&prompt).await {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => {
                warn!(game = %request.game, "Model returned no text, using fallback feedback");
                FALLBACK_FEEDBACK.to_string()
            }
            Err(e) => {
                error!(error = %e, game = %request.game, "Gemini API error");
                return Err(e.into());
            }
        };

        Ok(clean_feedback(&raw, self.max_chars))
    }
}
