//! Tests for the chunked story assembler.
//!
//! These tests validate the assembly loop against a scripted mock driver:
//! concatenation, continuity anchoring, context threading, and the
//! all-or-nothing failure contract.

mod test_utils;

use fabula_core::ClipKind;
use fabula_error::{FabulaErrorKind, OllamaErrorKind, StoryErrorKind};
use fabula_narrative::StoryAssembler;
use test_utils::{MockDriver, MockResponse};

/// Build a chunk response with the given character name and narrations.
fn chunk_json(base_traits: &str, narrations: &[&str]) -> String {
    let items = narrations
        .iter()
        .enumerate()
        .map(|(i, narration)| {
            format!(
                r#"{{
                    "sequence_number": {},
                    "clip_duration": 3.0625,
                    "clip_action": "MEDIUM SHOT: walking",
                    "voice_narration": "{}",
                    "type": "b-roll",
                    "environment": "EXT. FOREST - DAY",
                    "atmosphere": "(cinematic lighting:1.3)",
                    "negative_prompt": "(low quality:1.4)"
                }}"#,
                i + 1,
                narration
            )
        })
        .collect::<Vec<_>>()
        .join(",");

    format!(
        r#"{{
            "character": {{
                "base_traits": "{base_traits}",
                "facial_features": "(brown eyes:1.3)",
                "distinctive_features": "(scar:1.4)",
                "clothing": "(hiking gear:1.2)"
            }},
            "sequence": [{items}]
        }}"#
    )
}

#[tokio::test]
async fn test_sequences_concatenate_across_chunks() -> anyhow::Result<()> {
    let driver = MockDriver::new(vec![
        MockResponse::Success(chunk_json("(woman:1.4)", &["one", "two"])),
        MockResponse::Success(chunk_json("(woman:1.4)", &["three", "four"])),
        MockResponse::Success(chunk_json("(woman:1.4)", &["five", "six"])),
        MockResponse::Success(chunk_json("(woman:1.4)", &["seven", "eight"])),
    ]);

    let assembler = StoryAssembler::new(driver);
    let story = assembler.assemble("a long walk home", 4).await?;

    assert_eq!(story.sequence.len(), 8);
    assert_eq!(assembler.driver().call_count(), 4);

    let narrations: Vec<_> = story
        .sequence
        .iter()
        .map(|item| item.voice_narration.as_str())
        .collect();
    assert_eq!(
        narrations,
        ["one", "two", "three", "four", "five", "six", "seven", "eight"]
    );
    Ok(())
}

#[tokio::test]
async fn test_character_fixed_by_first_chunk() -> anyhow::Result<()> {
    let driver = MockDriver::new(vec![
        MockResponse::Success(chunk_json("(original hero:1.4)", &["one"])),
        MockResponse::Success(chunk_json("(imposter:1.4)", &["two"])),
    ]);

    let assembler = StoryAssembler::new(driver);
    let story = assembler.assemble("a long walk home", 2).await?;

    assert_eq!(story.character.base_traits, "(original hero:1.4)");
    assert_eq!(story.sequence.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_chunk_failure_aborts_assembly() {
    let driver = MockDriver::new(vec![
        MockResponse::Success(chunk_json("(woman:1.4)", &["one", "two"])),
        MockResponse::Error(OllamaErrorKind::Api {
            status: 500,
            body: "model crashed".to_string(),
        }),
    ]);

    let assembler = StoryAssembler::new(driver);
    let result = assembler.assemble("a long walk home", 4).await;

    let err = result.expect_err("chunk 2 failure must fail the whole assembly");
    match err.kind() {
        FabulaErrorKind::Ollama(e) => {
            assert!(matches!(e.kind, OllamaErrorKind::Api { status: 500, .. }))
        }
        other => panic!("unexpected error kind: {other:?}"),
    }

    // Chunks 3 and 4 are never attempted once chunk 2 fails.
    assert_eq!(assembler.driver().call_count(), 2);
}

#[tokio::test]
async fn test_continuity_context_threaded_between_chunks() -> anyhow::Result<()> {
    let driver = MockDriver::new(vec![
        MockResponse::Success(chunk_json("(original hero:1.4)", &["one", "two"])),
        MockResponse::Success(chunk_json("(original hero:1.4)", &["three"])),
    ]);

    let assembler = StoryAssembler::new(driver);
    assembler.assemble("a long walk home", 2).await?;

    let prompts = assembler.driver().prompts();
    assert_eq!(prompts.len(), 2);

    assert!(prompts[0].contains("This is chunk 1 of 2."));
    assert!(!prompts[0].contains("Previous character details"));

    // Chunk 2 carries the character sheet and chunk 1's last clip.
    assert!(prompts[1].contains("This is chunk 2 of 2."));
    assert!(prompts[1].contains("Previous character details"));
    assert!(prompts[1].contains("(original hero:1.4)"));
    assert!(prompts[1].contains("Last sequence"));
    assert!(prompts[1].contains("\"voice_narration\":\"two\""));
    Ok(())
}

#[tokio::test]
async fn test_prose_wrapped_chunk_is_extracted() -> anyhow::Result<()> {
    let wrapped = format!(
        "Sure! Here is your storyboard:\n{}\nHope that helps!",
        chunk_json("(woman:1.4)", &["one"])
    );
    let driver = MockDriver::new(vec![MockResponse::Success(wrapped)]);

    let assembler = StoryAssembler::new(driver);
    let story = assembler.assemble("a long walk home", 1).await?;

    assert_eq!(story.sequence.len(), 1);
    assert_eq!(story.sequence[0].voice_narration, "one");
    Ok(())
}

#[tokio::test]
async fn test_braceless_chunk_is_malformed() {
    let driver = MockDriver::new(vec![MockResponse::Success(
        "I could not produce a storyboard for that.".to_string(),
    )]);

    let assembler = StoryAssembler::new(driver);
    let err = assembler
        .assemble("a long walk home", 1)
        .await
        .expect_err("prose without JSON must fail");

    match err.kind() {
        FabulaErrorKind::Story(e) => {
            assert!(matches!(e.kind, StoryErrorKind::MissingJson(_)))
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
}

#[tokio::test]
async fn test_blank_response_is_rejected() {
    let driver = MockDriver::new(vec![MockResponse::Success("   \n".to_string())]);

    let assembler = StoryAssembler::new(driver);
    let err = assembler
        .assemble("a long walk home", 1)
        .await
        .expect_err("blank generation must fail");

    match err.kind() {
        FabulaErrorKind::Story(e) => {
            assert!(matches!(e.kind, StoryErrorKind::EmptyResponse))
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
}

#[tokio::test]
async fn test_legacy_keys_repaired_during_assembly() -> anyhow::Result<()> {
    // Chunk uses the legacy "duration" and "narration" spellings and omits
    // "type" entirely; the repair pass fixes all of it.
    let chunk = r#"{
        "character": {"base_traits": "(woman:1.4)"},
        "sequence": [
            {"duration": 4.5, "narration": "It began at dawn"}
        ]
    }"#;
    let driver = MockDriver::new(vec![MockResponse::Success(chunk.to_string())]);

    let assembler = StoryAssembler::new(driver);
    let story = assembler.assemble("a long walk home", 1).await?;

    let item = &story.sequence[0];
    assert_eq!(item.clip_duration, 4.5);
    assert_eq!(item.voice_narration, "It began at dawn");
    assert_eq!(item.kind, ClipKind::BRoll);
    assert_eq!(item.sequence_number, 1);
    Ok(())
}

#[tokio::test]
async fn test_music_score_anchored_to_first_chunk() -> anyhow::Result<()> {
    let first = r#"{
        "character": {"base_traits": "(woman:1.4)"},
        "music_score": {"type": "ambient", "style": "somber"},
        "sequence": [{"voice_narration": "one"}]
    }"#;
    let second = r#"{
        "character": {"base_traits": "(woman:1.4)"},
        "music_score": {"type": "orchestral", "style": "bombastic"},
        "sequence": [{"voice_narration": "two"}]
    }"#;
    let driver = MockDriver::new(vec![
        MockResponse::Success(first.to_string()),
        MockResponse::Success(second.to_string()),
    ]);

    let assembler = StoryAssembler::new(driver);
    let story = assembler.assemble("a long walk home", 2).await?;

    let score = story.music_score.expect("score from chunk 1");
    assert_eq!(score.score_type, "ambient");
    assert_eq!(story.sequence.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_backend_unreachable_propagates() {
    let driver = MockDriver::new(vec![MockResponse::Error(OllamaErrorKind::Unavailable(
        "http://localhost:11434".to_string(),
    ))]);

    let assembler = StoryAssembler::new(driver);
    let err = assembler
        .assemble("a long walk home", 4)
        .await
        .expect_err("unreachable backend must fail");

    match err.kind() {
        FabulaErrorKind::Ollama(e) => assert!(e.is_unavailable()),
        other => panic!("unexpected error kind: {other:?}"),
    }
    assert_eq!(assembler.driver().call_count(), 1);
}
