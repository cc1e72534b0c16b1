//! Ollama LLM client implementation.

use super::config::OllamaConfig;
use super::conversion::messages_to_prompt;
use async_trait::async_trait;
use fabula_core::{GenerateRequest, GenerateResponse, ModelOptions};
use fabula_error::{FabulaResult, OllamaError, OllamaErrorKind, OllamaResult};
use fabula_interface::{FabulaDriver, Health, HealthStatus};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Ollama LLM client for local model execution.
///
/// One outbound call per generation; failures propagate immediately with no
/// retry. No request timeout is set, matching the fail-or-hang behavior of
/// the backend contract.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    config: OllamaConfig,
    client: reqwest::Client,
}

/// Request body for `/api/generate`.
#[derive(Debug, Serialize)]
struct GenerateBody<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: ModelOptions,
}

/// Response body from `/api/generate` (non-streaming).
#[derive(Debug, Deserialize)]
struct GenerateReply {
    response: String,
}

impl OllamaClient {
    /// Create a new client.
    #[instrument(skip(config), fields(base_url = %config.base_url(), model = %config.model()))]
    pub fn new(config: OllamaConfig) -> Self {
        debug!("Creating Ollama client");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client configured from the environment.
    pub fn from_env() -> Self {
        Self::new(OllamaConfig::from_env())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    /// Check if the Ollama server is reachable.
    ///
    /// Probes `/api/tags`, which answers without touching a model.
    #[instrument(skip(self))]
    pub async fn check_connection(&self) -> OllamaResult<()> {
        let url = self.config.tags_url();
        debug!(url = %url, "Probing Ollama server");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(error = %e, "Failed to connect to Ollama server");
            OllamaError::new(OllamaErrorKind::Unavailable(self.config.base_url().clone()))
        })?;

        if response.status().is_success() {
            debug!("Ollama server is reachable");
            Ok(())
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(status, "Ollama probe returned error status");
            Err(OllamaError::new(OllamaErrorKind::Api { status, body }))
        }
    }

    /// Send one prompt to `/api/generate` and return the raw generated text.
    #[instrument(skip(self, prompt), fields(prompt_length = prompt.len()))]
    pub async fn generate_text(
        &self,
        prompt: &str,
        options: ModelOptions,
        model: Option<&str>,
    ) -> OllamaResult<String> {
        let url = self.config.generate_url();
        let body = GenerateBody {
            model: model.unwrap_or_else(|| self.config.model()),
            prompt,
            stream: false,
            options,
        };

        debug!(url = %url, model = %body.model, "Sending generation request");

        let response = self.client.post(&url).json(&body).send().await.map_err(|e| {
            warn!(error = %e, "Failed to reach Ollama server");
            OllamaError::new(OllamaErrorKind::Unavailable(self.config.base_url().clone()))
        })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(status, body = %body, "Ollama returned error status");
            return Err(OllamaError::new(OllamaErrorKind::Api { status, body }));
        }

        let reply: GenerateReply = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to deserialize Ollama response");
            OllamaError::new(OllamaErrorKind::Deserialization(e.to_string()))
        })?;

        debug!(
            response_length = reply.response.len(),
            "Received response from Ollama"
        );

        Ok(reply.response)
    }
}

#[async_trait]
impl FabulaDriver for OllamaClient {
    #[instrument(skip(self, req))]
    async fn generate(&self, req: &GenerateRequest) -> FabulaResult<GenerateResponse> {
        let prompt = messages_to_prompt(&req.messages);
        debug!(prompt_length = prompt.len(), "Flattened messages to prompt");

        let text = self
            .generate_text(&prompt, req.options, req.model.as_deref())
            .await?;

        Ok(GenerateResponse { text })
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}

#[async_trait]
impl Health for OllamaClient {
    async fn health(&self) -> HealthStatus {
        match self.check_connection().await {
            Ok(()) => HealthStatus::Connected,
            Err(e) => HealthStatus::Disconnected {
                reason: e.to_string(),
            },
        }
    }
}
