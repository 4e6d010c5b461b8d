//! # Gemini Client
//!
//! [`TextGenerator`] implementation backed by Google's Gemini
//! `generateContent` REST endpoint.
//!
//! ## Overview
//!
//! - One `reqwest::Client` is built per [`GeminiClient`] and reused for every
//!   request, so connections are pooled across concurrent handlers.
//! - The API key is sent in the `x-goog-api-key` header. It never appears in the
//!   URL, which keeps it out of transport error messages.
//! - A reply without `candidates[0].content.parts[0].text` is `Ok(None)`, not an
//!   error. The caller decides what to show instead.
//! - Each prompt gets exactly one attempt. There are no retries.

use crate::error::GenerationError;
use crate::traits::generator::TextGenerator;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use util::config::GeminiConfig;

/// Request body for the Gemini API.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    thinking_config: ThinkingConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    /// 0 disables thinking for faster replies.
    thinking_budget: u32,
}

/// Response from the Gemini API. Every level is optional; missing pieces mean
/// "no text", not a decoding failure.
#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl GeminiResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

/// Error envelope returned with non-2xx statuses.
#[derive(Deserialize)]
struct GeminiErrorResponse {
    error: GeminiErrorBody,
}

#[derive(Deserialize)]
struct GeminiErrorBody {
    message: Option<String>,
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    thinking_budget: u32,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationError::Client(e.to_string()))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            endpoint: format!(
                "{}/v1beta/models/{}:generateContent",
                config.base_url.trim_end_matches('/'),
                config.model
            ),
            thinking_budget: config.thinking_budget,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<Option<String>, GenerationError> {
        if self.api_key.is_empty() {
            return Err(GenerationError::MissingApiKey);
        }

        let request_body = GeminiRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                thinking_config: ThinkingConfig {
                    thinking_budget: self.thinking_budget,
                },
            }),
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| GenerationError::Transport(e.without_url().to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<GeminiErrorResponse>(&response_text)
                .ok()
                .and_then(|e| e.error.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            return Err(GenerationError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let response = serde_json::from_str::<GeminiResponse>(&response_text)
            .map_err(|e| GenerationError::Decode(e.to_string()))?;

        Ok(response.first_text())
    }
}
