//! Prompt composition for storyboard generation.
//!
//! The system prompt pins the model to a strict JSON schema; the chunk
//! prompt names the user's story and, from the second chunk on, serializes
//! the continuity context so the narrative and visuals stay consistent
//! across generations.

use fabula_core::{CharacterSheet, SequenceItem};

/// Continuity context carried into every chunk after the first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Continuity<'a> {
    /// Character sheet fixed by the first chunk
    pub character: &'a CharacterSheet,
    /// Most recently generated clip, if any
    pub last_item: Option<&'a SequenceItem>,
}

/// Instruction preamble sent as the system message of every chunk.
pub(crate) const SYSTEM_PROMPT: &str = r#"IMPORTANT: Return ONLY the JSON structure below. Do not add any explanatory text, introductions, or additional formatting before or after the JSON. The response must start with { and end with }.

CRITICAL: DO NOT USE MARKDOWN, BULLET POINTS, OR ANY TEXT FORMATTING. RETURN ONLY PURE JSON.

CRITICAL FIELD NAMES - USE THESE EXACTLY:
- "sequence_number" (not "shot" or "sequence")
- "clip_duration" (not "duration")
- "clip_action" (not "shot" or "action")
- "voice_narration" (not "narration")
- "type" (must be either "b-roll" or "character")
- "pose" (only in sequence items, never in character section)
- "environment" (not "location" or "setting")
- "atmosphere" (not "mood" or "tone")
- "negative_prompt" (not "negative" or "exclude")

STRUCTURE CHECKLIST:
1. Start with {
2. Character section must have ONLY: base_traits, facial_features, distinctive_features, clothing
3. Sequence array must start with [
4. Each sequence must have ALL fields in this order:
   - sequence_number
   - clip_duration
   - clip_action
   - voice_narration
   - type
   - pose (if type is "character")
   - environment
   - atmosphere
   - negative_prompt
5. Sequence array must end with ]
6. Root object must end with }

Return this exact JSON structure with your story content:

{
    "character": {
        "base_traits": "(mid-30s asian woman:1.4)",
        "facial_features": "(determined brown eyes:1.3)",
        "distinctive_features": "(small scar on left cheek:1.4)",
        "clothing": "(hiking gear:1.2)"
    },
    "music_score": {
        "type": "ambient",
        "style": "dark, ominous, suspenseful",
        "tempo": "slow, steady, building tension",
        "instrumentation": "piano, strings, electronic elements"
    },
    "sequence": [
        {
            "sequence_number": 1,
            "clip_duration": 3.0625,
            "clip_action": "ESTABLISHING SHOT: static camera, clouds drifting slowly",
            "voice_narration": "...",
            "type": "b-roll",
            "environment": "EXT. COLORADO MOUNTAINS - DAY",
            "atmosphere": "(8k uhd:1.4), (photorealistic:1.4), (cinematic lighting:1.3), (film grain:1.2), (cinematic color grading:1.3)",
            "negative_prompt": "(worst quality:1.4), (low quality:1.4), (blurry:1.2), (deformed:1.4), (distorted:1.4), (bad anatomy:1.4), (bad proportions:1.4), (multiple people:1.8), (wrong face:1.8), (different person:1.8), (duplicate body parts:1.4), (missing limbs:1.4)"
        },
        {
            "sequence_number": 2,
            "clip_duration": 3.0625,
            "clip_action": "MEDIUM SHOT: character walking through snow",
            "voice_narration": "The snow is deep",
            "type": "character",
            "pose": "[previous character traits], (walking through deep snow:1.4)",
            "environment": "EXT. COLORADO MOUNTAINS - DAY",
            "atmosphere": "(8k uhd:1.4), (photorealistic:1.4), (cinematic lighting:1.3), (film grain:1.2), (cinematic color grading:1.3)",
            "negative_prompt": "(worst quality:1.4), (low quality:1.4), (blurry:1.2), (deformed:1.4), (distorted:1.4), (bad anatomy:1.4), (bad proportions:1.4), (multiple people:1.8), (wrong face:1.8), (different person:1.8), (duplicate body parts:1.4), (missing limbs:1.4)"
        }
    ]
}

Guidelines for Parameter Generation:

Character Data:
1. base_traits: age, ethnicity, gender, body type with descriptive adjectives. Format: "(age ethnicity gender body type:1.4)". Keep it concise but specific.
2. facial_features: eyes, eyebrows, nose, lips, skin quality and facial structure. Format: "(feature description:1.3)", multiple features joined with commas.
3. distinctive_features: unique elements (scars, tattoos, birthmarks), hair style and color. Format: "(unique feature:1.4)".
4. clothing: specific materials, styles, accessories, fit and condition. Format: "(material style accessories:1.2)", multiple items listed separately.

Scene Data:
1. pose: body positioning, hand positions, camera angle and framing. Always reference previous character traits: "[previous character traits], (specific pose:1.4)". Show emotional progression through poses.
2. environment: start with shot type (ESTABLISHING SHOT, MEDIUM SHOT, CLOSE UP, TRACKING SHOT, AERIAL SHOT), then exact location, lighting sources and background elements. Progress environment naturally.
3. atmosphere: always include base quality terms "(8k uhd:1.4), (photorealistic:1.4), (cinematic lighting:1.3)", then mood/lighting terms matched to the scene.
4. negative_prompt: always include base quality negatives, plus scene-appropriate negatives; more anatomy negatives for character shots.
5. clip_action: camera movement and subject motion with timing, e.g. "gentle pan across small town at dusk, neon signs flickering". Match movement to emotional tone.

Shot Progression:
1. Opening: ESTABLISHING SHOT, then MEDIUM SHOT, introduce character with CLOSE UP, gentle camera movements.
2. Middle: alternate shot types, increase camera movement, build tension through shot selection.
3. Climax: dramatic angles, tracking shots, heightened visual impact.
4. Closing: return to wider shots and slower movements, create visual bookends.

Key requirements:
1. Character shots: 1.5-3.0 seconds. B-roll shots: 2.5-6.0 seconds. No more than 2 consecutive shots with the same duration.
2. All weighted terms must use format (term:1.4).
3. Use proper motion descriptions (e.g., "camera slowly panning right").
4. Voice narration must be first-person internal monologue, as if the character is talking to themselves. NO character names, dialogue markers, or quotation marks.
5. Use "..." for silence: establishing shots, action sequences, and emotional moments should let the visuals speak.
6. Internal dialogue MUST be shorter than clip_duration at 2.5 words per second with a 0.5 second buffer: 2s clip max 3 words, 3s clip max 5 words, 4s clip max 7 words, 5s clip max 9 words, 6s clip max 11 words. ALWAYS shorten the narration to fit; NEVER increase clip_duration.
7. Alternate between b-roll and character shots: start with b-roll, introduce character, mix detail shots, end with b-roll. Never use "environment" or "object" as type.
8. Environment should change at least once per chunk; at least 3 different camera angles; no more than 3 consecutive shots of the same type.
9. Include at least one visual callback to earlier scenes and give the character's emotional state distinct phases.
10. Music score: match score style, tempo and instrumentation to the story's genre and emotional arc, and keep it consistent across the whole story.

Sequence must follow: Start with b-roll -> Introduce character -> Mix detail shots -> End with b-roll."#;

/// Compose the user message for one chunk.
///
/// The first chunk carries no continuity context; later chunks append the
/// character sheet and the last generated clip serialized as JSON.
pub(crate) fn chunk_prompt(
    user_prompt: &str,
    chunk_number: u32,
    total_chunks: u32,
    continuity: Option<Continuity<'_>>,
) -> String {
    let mut prompt = format!(
        "Create a story about: {user_prompt}\n\
         This is chunk {chunk_number} of {total_chunks}.\n\
         Generate 8-10 sequences that continue the story naturally.\n\
         Maintain visual and narrative continuity with previous sequences.\n"
    );

    if let Some(continuity) = continuity {
        if let Ok(character) = serde_json::to_string(continuity.character) {
            prompt.push_str("\nPrevious character details: ");
            prompt.push_str(&character);
        }
        if let Some(last) = continuity.last_item {
            if let Ok(last) = serde_json::to_string(last) {
                prompt.push_str("\nLast sequence: ");
                prompt.push_str(&last);
            }
        }
    }

    prompt
}
