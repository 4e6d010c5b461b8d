use api::routes::build_app;
use api::state::AppState;
use async_trait::async_trait;
use axum::{Router, response::Response};
use feedback::sanitize::DEFAULT_MAX_CHARS;
use feedback::{FeedbackGenerator, GenerationError, RubricTable, TextGenerator};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// What the stub text generator does when called.
pub enum Reply {
    Text(&'static str),
    Nothing,
    Fail,
}

/// Test double for the external text-generation service.
pub struct StubGenerator {
    reply: Reply,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl StubGenerator {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate_text(&self, prompt: &str) -> Result<Option<String>, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        match self.reply {
            Reply::Text(text) => Ok(Some(text.to_string())),
            Reply::Nothing => Ok(None),
            Reply::Fail => Err(GenerationError::Status {
                status: 503,
                message: "The model is overloaded".into(),
            }),
        }
    }
}

/// Builds the full application (routes, logging middleware, CORS) around `stub`.
pub fn make_test_app(stub: Arc<StubGenerator>) -> Router {
    make_test_app_with(stub, true)
}

pub fn make_test_app_with(stub: Arc<StubGenerator>, expose_error_details: bool) -> Router {
    let generator =
        FeedbackGenerator::new(Arc::new(RubricTable::standard()), stub, DEFAULT_MAX_CHARS);
    let state = AppState::new(generator, expose_error_details);
    build_app(state, &[ALLOWED_ORIGIN.to_string()])
}

pub async fn get_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
