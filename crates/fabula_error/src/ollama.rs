//! Error types for the Ollama backend client.

/// Specific error conditions for Ollama API calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum OllamaErrorKind {
    /// Connection to the Ollama server could not be established
    #[display("Cannot connect to Ollama at {}", _0)]
    Unavailable(String),
    /// Ollama responded with a non-success status
    #[display("Ollama API error: {} - {}", status, body)]
    Api {
        /// HTTP status code returned by the backend
        status: u16,
        /// Response body, kept for diagnostics
        body: String,
    },
    /// Response body did not match the expected shape
    #[display("Failed to deserialize Ollama response: {}", _0)]
    Deserialization(String),
}

/// Ollama error with source location tracking.
///
/// # Examples
///
/// ```
/// use fabula_error::{OllamaError, OllamaErrorKind};
///
/// let err = OllamaError::new(OllamaErrorKind::Unavailable(
///     "http://localhost:11434".to_string(),
/// ));
/// assert!(format!("{}", err).contains("11434"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Ollama Error: {} at line {} in {}", kind, line, file)]
pub struct OllamaError {
    /// The specific error condition
    pub kind: OllamaErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl OllamaError {
    /// Create a new OllamaError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: OllamaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether the backend could not be reached at all.
    ///
    /// Connection failures map to a service-unavailable response at the HTTP
    /// layer; every other kind is a plain failure.
    pub fn is_unavailable(&self) -> bool {
        matches!(self.kind, OllamaErrorKind::Unavailable(_))
    }
}

/// Result type for Ollama client operations.
pub type OllamaResult<T> = Result<T, OllamaError>;
