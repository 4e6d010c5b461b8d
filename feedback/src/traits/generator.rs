//! # TextGenerator Trait
//!
//! Abstraction over the external language-model service. The feedback pipeline
//! only ever talks to a `dyn TextGenerator`, so tests can swap in a double that
//! records calls or simulates failures.

use crate::error::GenerationError;
use async_trait::async_trait;

/// A text-generation backend.
///
/// # Returns
/// - `Ok(Some(text))`: the first candidate's first text part.
/// - `Ok(None)`: the service answered but the reply carried no text.
/// - `Err(GenerationError)`: the call itself failed (transport, status, decoding).
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<Option<String>, GenerationError>;
}
