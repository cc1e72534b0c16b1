//! Chunked storyboard assembly engine for Fabula.
//!
//! This crate turns one user prompt into a complete storyboard by chaining
//! several bounded LLM generations:
//!
//! - **Assembler**: drives the sequential chunk loop, carrying the character
//!   sheet and the last generated clip forward as continuity context.
//! - **Extraction**: locates the JSON object inside noisy model output and
//!   parses it with diagnostics.
//! - **Normalization**: repairs known field-naming mistakes and fills missing
//!   required fields with defaults, so a structurally valid clip always comes
//!   out of a salvageable one.
//!
//! # Example
//!
//! ```rust,ignore
//! use fabula_models::OllamaClient;
//! use fabula_narrative::{StoryAssembler, DEFAULT_TOTAL_CHUNKS};
//!
//! # async fn example() -> fabula_error::FabulaResult<()> {
//! let assembler = StoryAssembler::new(OllamaClient::from_env());
//! let story = assembler
//!     .assemble("a hiker loses her rubber duck", DEFAULT_TOTAL_CHUNKS)
//!     .await?;
//! println!("{} clips", story.sequence.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembler;
mod extraction;
mod normalize;
mod prompt;

pub use assembler::{StoryAssembler, DEFAULT_TOTAL_CHUNKS};
pub use extraction::{extract_json, parse_json};
pub use normalize::{normalize_chunk, normalize_sequence_item};
