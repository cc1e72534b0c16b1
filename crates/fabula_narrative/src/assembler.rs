//! Chunked story assembly.
//!
//! One user prompt becomes several bounded generations chained in sequence:
//! each chunk's prompt embeds the previous chunk's last clip (and the
//! character sheet) so the model keeps narrative and visual continuity. The
//! chunks' sequences concatenate into one document.

use crate::extraction::{extract_json, parse_json};
use crate::normalize::normalize_chunk;
use crate::prompt::{chunk_prompt, Continuity, SYSTEM_PROMPT};
use fabula_core::{GenerateRequest, Message, ModelOptions, StoryDocument};
use fabula_error::{FabulaResult, StoryError, StoryErrorKind};
use fabula_interface::FabulaDriver;
use tracing::{debug, info, instrument};

/// Number of chunks generated per story unless the caller overrides it.
pub const DEFAULT_TOTAL_CHUNKS: u32 = 4;

/// Assembles a multi-chunk storyboard by calling an LLM driver in sequence.
///
/// The loop is strictly sequential: each chunk's prompt depends on the
/// previous chunk's output, so there is nothing to parallelize. Any chunk
/// failure aborts the whole assembly; partial stories are never returned.
///
/// # Example
///
/// ```rust,ignore
/// use fabula_models::OllamaClient;
/// use fabula_narrative::{StoryAssembler, DEFAULT_TOTAL_CHUNKS};
///
/// let assembler = StoryAssembler::new(OllamaClient::from_env());
/// let story = assembler.assemble("a lighthouse keeper", DEFAULT_TOTAL_CHUNKS).await?;
/// ```
#[derive(Debug, Clone)]
pub struct StoryAssembler<D> {
    driver: D,
    options: ModelOptions,
}

impl<D: FabulaDriver> StoryAssembler<D> {
    /// Create a new assembler with default sampling options.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            options: ModelOptions::default(),
        }
    }

    /// Override the sampling options sent with every chunk.
    pub fn with_options(mut self, options: ModelOptions) -> Self {
        self.options = options;
        self
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Generate a complete storyboard for `user_prompt`.
    ///
    /// The first chunk seeds the document and fixes its character sheet and
    /// music score; later chunks only contribute sequence items.
    ///
    /// # Errors
    ///
    /// Fails if any chunk's generation, extraction, or parse fails. Nothing
    /// of the partially assembled story survives a failure.
    #[instrument(skip(self, user_prompt))]
    pub async fn assemble(
        &self,
        user_prompt: &str,
        total_chunks: u32,
    ) -> FabulaResult<StoryDocument> {
        let mut story = self.generate_chunk(user_prompt, 1, total_chunks, None).await?;

        debug!(
            sequences = story.sequence.len(),
            "Generated chunk 1, character sheet fixed"
        );

        for chunk_number in 2..=total_chunks {
            let chunk = {
                let continuity = Continuity {
                    character: &story.character,
                    last_item: story.last_sequence_item(),
                };
                self.generate_chunk(user_prompt, chunk_number, total_chunks, Some(continuity))
                    .await?
            };

            // Later chunks re-emit a character section; only their sequences
            // are kept, so chunk 1 remains the continuity anchor.
            let appended = chunk.sequence.len();
            story.sequence.extend(chunk.sequence);

            debug!(
                chunk = chunk_number,
                appended,
                total = story.sequence.len(),
                "Appended chunk"
            );
        }

        info!(
            sequences = story.sequence.len(),
            "Story assembly complete"
        );

        Ok(story)
    }

    /// Run one generation and normalize it into a chunk document.
    async fn generate_chunk(
        &self,
        user_prompt: &str,
        chunk_number: u32,
        total_chunks: u32,
        continuity: Option<Continuity<'_>>,
    ) -> FabulaResult<StoryDocument> {
        let messages = vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(chunk_prompt(
                user_prompt,
                chunk_number,
                total_chunks,
                continuity,
            )),
        ];

        let request = GenerateRequest {
            messages,
            options: self.options,
            model: None,
        };

        let response = self.driver.generate(&request).await?;

        if response.text.trim().is_empty() {
            return Err(StoryError::new(StoryErrorKind::EmptyResponse).into());
        }

        let payload = extract_json(&response.text)?;
        let value: serde_json::Value = parse_json(payload)?;

        Ok(normalize_chunk(&value))
    }
}
