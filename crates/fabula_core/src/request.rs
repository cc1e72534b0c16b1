//! Request and response types for LLM generation.

use crate::{Message, ModelOptions};
use serde::{Deserialize, Serialize};

/// A generation request composed by the assembler.
///
/// # Examples
///
/// ```
/// use fabula_core::{GenerateRequest, Message, ModelOptions};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::user("Hello!")])
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.options, ModelOptions::default());
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// The messages to flatten into the backend prompt
    pub messages: Vec<Message>,
    /// Sampling parameters
    pub options: ModelOptions,
    /// Model identifier override; the client's configured model when `None`
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Start building a request.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use fabula_core::GenerateResponse;
///
/// let response = GenerateResponse {
///     text: "{\"sequence\": []}".to_string(),
/// };
/// assert!(response.text.contains("sequence"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Raw generated text, which may wrap the JSON payload in prose
    pub text: String,
}
