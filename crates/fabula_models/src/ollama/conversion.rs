//! Conversion from Fabula messages to the Ollama prompt template.

use fabula_core::{Message, Role};

/// Flatten messages into the instruction-tuned chat template Ollama expects
/// when called through `/api/generate`.
///
/// Each message is wrapped in its role marker and closed with `</s>`; a
/// trailing `<|assistant|>` marker cues the model to answer.
///
/// # Examples
///
/// ```
/// use fabula_core::Message;
/// use fabula_models::messages_to_prompt;
///
/// let prompt = messages_to_prompt(&[
///     Message::system("Return ONLY JSON."),
///     Message::user("Tell me a story."),
/// ]);
/// assert!(prompt.starts_with("<|system|>\n"));
/// assert!(prompt.ends_with("<|assistant|>"));
/// ```
pub fn messages_to_prompt(messages: &[Message]) -> String {
    let mut prompt = String::new();

    for msg in messages {
        let marker = match msg.role {
            Role::System => "<|system|>",
            Role::User => "<|user|>",
            Role::Assistant => "<|assistant|>",
        };

        prompt.push_str(marker);
        prompt.push('\n');
        prompt.push_str(&msg.content);
        prompt.push_str("\n</s>\n");
    }

    prompt.push_str("<|assistant|>");
    prompt
}
