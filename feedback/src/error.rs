//! Feedback Error Types
//!
//! Errors raised while resolving rubric entries, calling the text-generation
//! service, and producing feedback for a request.
//!
//! # Example
//!
//! ```rust
//! use feedback::error::RubricError;
//!
//! let err = RubricError::NotFound { level: 4, score: 10 };
//! assert!(err.to_string().contains("level 4"));
//! ```

/// Errors from the rubric table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RubricError {
    /// No entry exists for the requested pair.
    #[error("Kombinasi level {level} dan skor {score} tidak ditemukan dalam panduan.")]
    NotFound { level: i64, score: i64 },
    /// A table was built with two entries for the same pair.
    #[error("duplicate rubric entry for level {level}, score {score}")]
    DuplicateEntry { level: u8, score: u8 },
}

/// Errors from the external text-generation call.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Gemini API key is not configured")]
    MissingApiKey,
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
    /// Network failure or timeout.
    #[error("request to Gemini failed: {0}")]
    Transport(String),
    /// Gemini answered with a non-success status.
    #[error("Gemini returned {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body was not valid JSON.
    #[error("error decoding Gemini response: {0}")]
    Decode(String),
}

/// Errors surfaced by [`crate::FeedbackGenerator::generate`].
#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("Kombinasi level {level} dan skor {score} tidak ditemukan dalam panduan.")]
    RubricMiss { level: i64, score: i64 },
    #[error(transparent)]
    Upstream(#[from] GenerationError),
}
