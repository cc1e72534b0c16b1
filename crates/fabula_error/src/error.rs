//! Top-level error wrapper types.

use crate::{OllamaError, ServerError, StoryError};

/// This is the foundation error enum for the Fabula workspace.
///
/// # Examples
///
/// ```
/// use fabula_error::{FabulaError, OllamaError, OllamaErrorKind};
///
/// let ollama_err = OllamaError::new(OllamaErrorKind::Deserialization(
///     "missing field `response`".to_string(),
/// ));
/// let err: FabulaError = ollama_err.into();
/// assert!(format!("{}", err).contains("Ollama Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FabulaErrorKind {
    /// Ollama backend error
    #[from(OllamaError)]
    Ollama(OllamaError),
    /// Storyboard extraction or assembly error
    #[from(StoryError)]
    Story(StoryError),
    /// HTTP façade error
    #[from(ServerError)]
    Server(ServerError),
}

/// Fabula error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fabula_error::{FabulaResult, StoryError, StoryErrorKind};
///
/// fn might_fail() -> FabulaResult<()> {
///     Err(StoryError::new(StoryErrorKind::EmptyResponse))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fabula Error: {}", _0)]
pub struct FabulaError(Box<FabulaErrorKind>);

impl FabulaError {
    /// Create a new error from a kind.
    pub fn new(kind: FabulaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FabulaErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FabulaErrorKind
impl<T> From<T> for FabulaError
where
    T: Into<FabulaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fabula operations.
///
/// # Examples
///
/// ```
/// use fabula_error::{FabulaResult, StoryError, StoryErrorKind};
///
/// fn extract() -> FabulaResult<String> {
///     Err(StoryError::new(StoryErrorKind::MissingJson(0)))?
/// }
/// ```
pub type FabulaResult<T> = std::result::Result<T, FabulaError>;
