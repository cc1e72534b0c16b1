//! Inference backend clients for the Fabula storyboard service.
//!
//! Currently a single backend is supported: a locally hosted Ollama server
//! reached over HTTP.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ollama;

pub use ollama::{messages_to_prompt, OllamaClient, OllamaConfig};
