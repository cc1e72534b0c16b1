//! Configuration for the Ollama server connection.

/// Configuration for the Ollama server connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct OllamaConfig {
    /// Base URL of the server (e.g., "http://localhost:11434")
    base_url: String,
    /// Model identifier to use for inference
    model: String,
}

/// Default server location when `OLLAMA_API_URL` is unset.
const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default model when `OLLAMA_MODEL` is unset.
const DEFAULT_MODEL: &str = "llama3";

impl OllamaConfig {
    /// Create a new configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use fabula_models::OllamaConfig;
    ///
    /// let config = OllamaConfig::new("http://localhost:11434/", "llama3.3");
    /// assert_eq!(config.generate_url(), "http://localhost:11434/api/generate");
    /// assert_eq!(config.model(), "llama3.3");
    /// ```
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `OLLAMA_API_URL` (default: "http://localhost:11434")
    /// - `OLLAMA_MODEL` (default: "llama3")
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("OLLAMA_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(base_url, model)
    }

    /// Endpoint for text generation.
    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    /// Endpoint for the liveness probe.
    pub fn tags_url(&self) -> String {
        format!("{}/api/tags", self.base_url)
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_MODEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = OllamaConfig::new("http://10.0.0.5:11434///", "mistral");
        assert_eq!(config.base_url(), "http://10.0.0.5:11434");
        assert_eq!(config.tags_url(), "http://10.0.0.5:11434/api/tags");
    }

    #[test]
    fn default_points_at_localhost() {
        let config = OllamaConfig::default();
        assert_eq!(config.generate_url(), "http://localhost:11434/api/generate");
        assert_eq!(config.model(), "llama3");
    }
}
