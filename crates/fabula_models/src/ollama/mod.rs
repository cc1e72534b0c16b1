//! Ollama LLM client implementation.

mod client;
mod config;
mod conversion;

pub use client::OllamaClient;
pub use config::OllamaConfig;
pub use conversion::messages_to_prompt;
