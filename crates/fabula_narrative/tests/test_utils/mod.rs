//! Test utilities for Fabula narrative tests.
//!
//! Provides a scripted mock driver so assembly behavior can be validated
//! without a running Ollama server.

use async_trait::async_trait;
use fabula_core::{GenerateRequest, GenerateResponse};
use fabula_error::{FabulaResult, OllamaError, OllamaErrorKind};
use fabula_interface::FabulaDriver;
use std::sync::Mutex;

/// A single mock response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(OllamaErrorKind),
}

/// Mock driver serving a scripted sequence of responses.
///
/// Records every prompt it receives so tests can assert on continuity
/// context threading.
pub struct MockDriver {
    responses: Vec<MockResponse>,
    prompts: Mutex<Vec<String>>,
    call_count: Mutex<usize>,
}

impl MockDriver {
    /// Create a mock driver that replays `responses` in order.
    pub fn new(responses: Vec<MockResponse>) -> Self {
        Self {
            responses,
            prompts: Mutex::new(Vec::new()),
            call_count: Mutex::new(0),
        }
    }

    /// Create a mock driver that always succeeds with the given text.
    #[allow(dead_code)]
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new(vec![MockResponse::Success(text.into())])
    }

    /// Get the number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Get the prompts seen so far, one entry per generate() call.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl FabulaDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> FabulaResult<GenerateResponse> {
        let flattened = req
            .messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        self.prompts.lock().unwrap().push(flattened);

        let mut count = self.call_count.lock().unwrap();
        let current = *count;
        *count += 1;

        match self.responses.get(current) {
            Some(MockResponse::Success(text)) => Ok(GenerateResponse { text: text.clone() }),
            Some(MockResponse::Error(kind)) => Err(OllamaError::new(kind.clone()).into()),
            None => Err(OllamaError::new(OllamaErrorKind::Api {
                status: 500,
                body: format!(
                    "Mock sequence exhausted (call {} beyond {} responses)",
                    current + 1,
                    self.responses.len()
                ),
            })
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-llama"
    }
}
