//! # Feedback Library
//!
//! Core logic for turning a student's game result into a short, encouraging
//! feedback paragraph.
//!
//! ## Key Concepts
//! - **Rubric**: a static table mapping `(level, score)` to a category, a
//!   description of the student's ability and a recommended next step.
//! - **Prompt**: the instruction text sent to the language model, built from the
//!   rubric entry and the request.
//! - **TextGenerator**: the seam to the external text-generation service. The
//!   production implementation is [`gemini::GeminiClient`].
//! - **Sanitizer**: cleans the model's reply into a single plain paragraph.
//!
//! [`generator::FeedbackGenerator`] ties these together for one request.

pub mod error;
pub mod gemini;
pub mod generator;
pub mod prompt;
pub mod rubric;
pub mod sanitize;
pub mod traits;

pub use error::{FeedbackError, GenerationError, RubricError};
pub use generator::{FeedbackGenerator, FeedbackRequest, FALLBACK_FEEDBACK};
pub use rubric::{RubricEntry, RubricKey, RubricTable};
pub use traits::generator::TextGenerator;
