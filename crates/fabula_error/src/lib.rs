//! Error types for the Fabula storyboard service.
//!
//! This crate provides the foundation error types used throughout the Fabula
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use fabula_error::{FabulaResult, StoryError, StoryErrorKind};
//!
//! fn parse_storyboard() -> FabulaResult<String> {
//!     Err(StoryError::new(StoryErrorKind::EmptyResponse))?
//! }
//!
//! match parse_storyboard() {
//!     Ok(doc) => println!("Got: {}", doc),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod ollama;
mod server;
mod story;

pub use error::{FabulaError, FabulaErrorKind, FabulaResult};
pub use ollama::{OllamaError, OllamaErrorKind, OllamaResult};
pub use server::{ServerError, ServerErrorKind};
pub use story::{StoryError, StoryErrorKind};
