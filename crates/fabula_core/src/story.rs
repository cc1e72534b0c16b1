//! Storyboard document model.
//!
//! These types mirror the JSON schema the system prompt instructs the model
//! to emit: a character sheet fixed for the whole story, an optional music
//! score, and an ordered list of sequence items, one per video clip.

use serde::{Deserialize, Serialize};

/// Canonical clip duration in seconds (49 frames at 16 fps), used as the
/// default when a generated item omits `clip_duration`.
pub const DEFAULT_CLIP_DURATION: f64 = 3.0625;

/// Literal narration value meaning silence for the clip.
pub const SILENCE_SENTINEL: &str = "...";

/// Visual descriptors for the story's main character.
///
/// All fields default to empty strings so a partially generated sheet can be
/// salvaged rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    /// Age, ethnicity, gender, body type
    #[serde(default)]
    pub base_traits: String,
    /// Eyes, eyebrows, skin, facial structure
    #[serde(default)]
    pub facial_features: String,
    /// Scars, tattoos, hair, other memorable details
    #[serde(default)]
    pub distinctive_features: String,
    /// Materials, styles, accessories
    #[serde(default)]
    pub clothing: String,
}

/// Music direction for the assembled story.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicScore {
    /// Score category (ambient, orchestral, electronic, ...)
    #[serde(rename = "type", default)]
    pub score_type: String,
    /// Mood and stylistic direction
    #[serde(default)]
    pub style: String,
    /// Pacing direction
    #[serde(default)]
    pub tempo: String,
    /// Instrument palette
    #[serde(default)]
    pub instrumentation: String,
}

/// Whether a clip shows the character or scene-setting footage.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum ClipKind {
    /// Establishing shots and environment details
    #[default]
    #[serde(rename = "b-roll")]
    #[display("b-roll")]
    BRoll,
    /// Shots featuring the main character
    #[serde(rename = "character")]
    #[display("character")]
    Character,
}

/// One storyboard unit describing a single video clip.
///
/// `sequence_number` restarts in every generated chunk and is never
/// renumbered across the merged document, so treat it as display order only.
///
/// # Examples
///
/// ```
/// use fabula_core::{ClipKind, SequenceItem};
///
/// let item = SequenceItem {
///     sequence_number: 1,
///     clip_duration: 5.0,
///     clip_action: "ESTABLISHING SHOT: slow pan across the valley".to_string(),
///     voice_narration: "...".to_string(),
///     kind: ClipKind::BRoll,
///     pose: None,
///     environment: "EXT. MOUNTAIN VALLEY - DAWN".to_string(),
///     atmosphere: "(8k uhd:1.4), (cinematic lighting:1.3)".to_string(),
///     negative_prompt: "(low quality:1.4)".to_string(),
/// };
/// assert!(item.is_silent());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceItem {
    /// Position within the generating chunk, 1-based
    pub sequence_number: u32,
    /// Clip length in seconds
    pub clip_duration: f64,
    /// Camera movement and subject action
    pub clip_action: String,
    /// First-person internal monologue, or [`SILENCE_SENTINEL`]
    pub voice_narration: String,
    /// Clip category
    #[serde(rename = "type", default)]
    pub kind: ClipKind,
    /// Character pose, present only for character clips
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pose: Option<String>,
    /// Shot type, location, lighting
    pub environment: String,
    /// Quality and mood descriptors
    pub atmosphere: String,
    /// Artifacts to exclude from image generation
    pub negative_prompt: String,
}

impl SequenceItem {
    /// Whether this clip carries no narration.
    pub fn is_silent(&self) -> bool {
        self.voice_narration == SILENCE_SENTINEL
    }
}

/// A complete storyboard: character continuity anchor plus ordered clips.
///
/// Built fresh per request, chunk by chunk, and discarded once the response
/// is sent. The `character` and `music_score` of the first chunk anchor the
/// whole document; later chunks only contribute to `sequence`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryDocument {
    /// Visual continuity anchor, fixed by the first chunk
    #[serde(default)]
    pub character: CharacterSheet,
    /// Optional music direction, fixed by the first chunk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_score: Option<MusicScore>,
    /// Ordered clips; insertion order is narrative order
    #[serde(default)]
    pub sequence: Vec<SequenceItem>,
}

impl StoryDocument {
    /// The most recently appended clip, used as continuity context for the
    /// next chunk.
    pub fn last_sequence_item(&self) -> Option<&SequenceItem> {
        self.sequence.last()
    }
}
