//! Best-effort repair of generated sequence items.
//!
//! Models drift from the schema in predictable ways: misspelled or legacy
//! field names, dropped fields. The repair pass renames a fixed table of
//! known mistakes to their canonical names, then fills any still-missing
//! required field with a type-appropriate default. It never fails; the
//! intent is salvage, not validation.

use fabula_core::{
    CharacterSheet, ClipKind, MusicScore, SequenceItem, StoryDocument, DEFAULT_CLIP_DURATION,
};
use serde_json::{Map, Value};

/// Known mistaken keys and their canonical spellings.
const LEGACY_KEYS: &[(&str, &str)] = &[
    ("voice_nadration", "voice_narration"),
    ("shot", "clip_action"),
    ("duration", "clip_duration"),
    ("narration", "voice_narration"),
    ("location", "environment"),
    ("setting", "environment"),
    ("mood", "atmosphere"),
    ("tone", "atmosphere"),
    ("negative", "negative_prompt"),
    ("exclude", "negative_prompt"),
];

fn canonical_key(key: &str) -> &str {
    LEGACY_KEYS
        .iter()
        .find(|(legacy, _)| *legacy == key)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(key)
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Repair one raw sequence item into a structurally valid [`SequenceItem`].
///
/// `position` is the item's 0-based index within its chunk; it seeds the
/// `sequence_number` default (1-based) when the model omitted the field.
///
/// # Examples
///
/// ```
/// use fabula_core::{ClipKind, DEFAULT_CLIP_DURATION};
/// use fabula_narrative::normalize_sequence_item;
/// use serde_json::json;
///
/// let raw = json!({"clip_action": "CLOSE UP: trembling hands"});
/// let item = normalize_sequence_item(raw.as_object().unwrap(), 0);
/// assert_eq!(item.clip_duration, DEFAULT_CLIP_DURATION);
/// assert_eq!(item.kind, ClipKind::BRoll);
/// assert_eq!(item.sequence_number, 1);
/// ```
pub fn normalize_sequence_item(raw: &Map<String, Value>, position: usize) -> SequenceItem {
    let mut fields = Map::with_capacity(raw.len());
    for (key, value) in raw {
        let fixed = canonical_key(key);
        if fixed != key && raw.contains_key(fixed) {
            // Canonical spelling already present; the legacy duplicate loses.
            continue;
        }
        fields.insert(fixed.to_string(), value.clone());
    }

    let kind = fields
        .get("type")
        .and_then(Value::as_str)
        .map(|s| match s {
            "character" => ClipKind::Character,
            _ => ClipKind::BRoll,
        })
        .unwrap_or_default();

    SequenceItem {
        sequence_number: fields
            .get("sequence_number")
            .and_then(Value::as_u64)
            .map(|n| n as u32)
            .unwrap_or(position as u32 + 1),
        clip_duration: fields
            .get("clip_duration")
            .and_then(Value::as_f64)
            .unwrap_or(DEFAULT_CLIP_DURATION),
        clip_action: string_field(&fields, "clip_action").unwrap_or_default(),
        voice_narration: string_field(&fields, "voice_narration").unwrap_or_default(),
        kind,
        pose: string_field(&fields, "pose"),
        environment: string_field(&fields, "environment").unwrap_or_default(),
        atmosphere: string_field(&fields, "atmosphere").unwrap_or_default(),
        negative_prompt: string_field(&fields, "negative_prompt").unwrap_or_default(),
    }
}

/// Normalize one parsed chunk into a [`StoryDocument`].
///
/// The character sheet and music score are salvaged independently of the
/// sequence: a malformed sheet degrades to empty descriptors rather than
/// failing the chunk. Non-object entries in the sequence array are dropped.
pub fn normalize_chunk(value: &Value) -> StoryDocument {
    let character: CharacterSheet = value
        .get("character")
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or_default();

    let music_score: Option<MusicScore> = value
        .get("music_score")
        .and_then(|v| serde_json::from_value(v.clone()).ok());

    let sequence = value
        .get("sequence")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .enumerate()
                .filter_map(|(position, item)| match item.as_object() {
                    Some(map) => Some(normalize_sequence_item(map, position)),
                    None => {
                        tracing::warn!(position, "Dropping non-object sequence entry");
                        None
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    StoryDocument {
        character,
        music_score,
        sequence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("object literal")
    }

    #[test]
    fn test_missing_duration_and_type_get_defaults() {
        let raw = as_map(json!({
            "sequence_number": 3,
            "clip_action": "MEDIUM SHOT: walking through snow",
            "voice_narration": "The snow is deep",
            "environment": "EXT. MOUNTAINS - DAY",
            "atmosphere": "(cinematic lighting:1.3)",
            "negative_prompt": "(low quality:1.4)"
        }));
        let item = normalize_sequence_item(&raw, 2);
        assert_eq!(item.clip_duration, 3.0625);
        assert_eq!(item.kind, ClipKind::BRoll);
        assert_eq!(item.sequence_number, 3);
    }

    #[test]
    fn test_legacy_duration_key_renamed_losslessly() {
        let raw = as_map(json!({"duration": 4.5}));
        let item = normalize_sequence_item(&raw, 0);
        assert_eq!(item.clip_duration, 4.5);
    }

    #[test]
    fn test_all_legacy_keys_renamed() {
        let raw = as_map(json!({
            "shot": "TRACKING SHOT: down the corridor",
            "voice_nadration": "Keep moving",
            "location": "INT. SCHOOL HALLWAY - NIGHT",
            "mood": "(film grain:1.2)",
            "negative": "(blurry:1.2)"
        }));
        let item = normalize_sequence_item(&raw, 0);
        assert_eq!(item.clip_action, "TRACKING SHOT: down the corridor");
        assert_eq!(item.voice_narration, "Keep moving");
        assert_eq!(item.environment, "INT. SCHOOL HALLWAY - NIGHT");
        assert_eq!(item.atmosphere, "(film grain:1.2)");
        assert_eq!(item.negative_prompt, "(blurry:1.2)");
    }

    #[test]
    fn test_canonical_key_wins_over_legacy_duplicate() {
        let raw = as_map(json!({
            "clip_duration": 2.5,
            "duration": 9.0
        }));
        let item = normalize_sequence_item(&raw, 0);
        assert_eq!(item.clip_duration, 2.5);
    }

    #[test]
    fn test_missing_sequence_number_defaults_to_position() {
        let raw = as_map(json!({"clip_action": "CLOSE UP"}));
        assert_eq!(normalize_sequence_item(&raw, 0).sequence_number, 1);
        assert_eq!(normalize_sequence_item(&raw, 5).sequence_number, 6);
    }

    #[test]
    fn test_unknown_type_salvaged_to_b_roll() {
        let raw = as_map(json!({"type": "environment"}));
        assert_eq!(normalize_sequence_item(&raw, 0).kind, ClipKind::BRoll);

        let raw = as_map(json!({"type": "character", "pose": "(sitting:1.4)"}));
        let item = normalize_sequence_item(&raw, 0);
        assert_eq!(item.kind, ClipKind::Character);
        assert_eq!(item.pose.as_deref(), Some("(sitting:1.4)"));
    }

    #[test]
    fn test_missing_strings_default_to_empty() {
        let raw = as_map(json!({}));
        let item = normalize_sequence_item(&raw, 0);
        assert_eq!(item.clip_action, "");
        assert_eq!(item.voice_narration, "");
        assert_eq!(item.environment, "");
        assert!(item.pose.is_none());
    }

    #[test]
    fn test_normalize_chunk_salvages_character_and_music() {
        let chunk = json!({
            "character": {"base_traits": "(teenage girl:1.4)"},
            "music_score": {"type": "ambient", "style": "tense"},
            "sequence": [
                {"clip_action": "ESTABLISHING SHOT"},
                "not an object",
                {"duration": 1.5625}
            ]
        });
        let doc = normalize_chunk(&chunk);
        assert_eq!(doc.character.base_traits, "(teenage girl:1.4)");
        assert_eq!(doc.character.clothing, "");
        assert_eq!(doc.music_score.as_ref().unwrap().score_type, "ambient");
        assert_eq!(doc.sequence.len(), 2);
        assert_eq!(doc.sequence[1].clip_duration, 1.5625);
    }

    #[test]
    fn test_normalize_chunk_tolerates_missing_sections() {
        let doc = normalize_chunk(&json!({}));
        assert_eq!(doc.character, CharacterSheet::default());
        assert!(doc.music_score.is_none());
        assert!(doc.sequence.is_empty());
    }
}
