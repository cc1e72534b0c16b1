//! Sampling parameters forwarded to the inference backend.

use serde::{Deserialize, Serialize};

/// Sampling parameters for a generation call.
///
/// Serialized verbatim into the `options` field of the Ollama request body.
/// Streaming is not part of this set: the client pins `stream` to `false`
/// because the assembler consumes whole generations.
///
/// # Examples
///
/// ```
/// use fabula_core::ModelOptions;
///
/// let options = ModelOptions::default();
/// assert_eq!(options.temperature, 0.7);
/// assert_eq!(options.top_p, 0.9);
/// assert_eq!(options.repeat_penalty, 1.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelOptions {
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling cutoff
    pub top_p: f32,
    /// Penalty applied to repeated tokens
    pub repeat_penalty: f32,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.9,
            repeat_penalty: 1.1,
        }
    }
}
