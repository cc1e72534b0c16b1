//! Utilities for extracting structured data from LLM responses.
//!
//! Model output is not contractually JSON: generations often wrap the
//! payload in explanatory prose ("Sure! Here is the JSON: ..."). This module
//! locates the embedded object and parses it with enough diagnostics to
//! track prompt/model drift.

use fabula_error::{FabulaResult, StoryError, StoryErrorKind};

/// Extract the JSON object embedded in a response.
///
/// Takes the substring from the first `{` to the last `}` inclusive, which
/// tolerates leading and trailing commentary around the payload.
///
/// # Errors
///
/// Returns an error if either delimiter is absent.
///
/// # Examples
///
/// ```
/// use fabula_narrative::extract_json;
///
/// let response = "Sure! Here is the JSON: {\"a\":1} Hope that helps!";
/// assert_eq!(extract_json(response).unwrap(), "{\"a\":1}");
/// ```
pub fn extract_json(response: &str) -> FabulaResult<&str> {
    let start = response.find('{');
    let end = response.rfind('}');

    match (start, end) {
        (Some(start), Some(end)) if start < end => Ok(&response[start..=end]),
        _ => {
            tracing::error!(
                response_length = response.len(),
                "No JSON object found in LLM response"
            );
            Err(StoryError::new(StoryErrorKind::MissingJson(response.len())).into())
        }
    }
}

/// Parse and validate JSON, returning a specific type.
///
/// # Errors
///
/// Returns an error carrying the parser's line/column position if the string
/// cannot be parsed into type `T`.
///
/// # Examples
///
/// ```
/// use fabula_narrative::parse_json;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Clip {
///     clip_duration: f64,
/// }
///
/// let clip: Clip = parse_json(r#"{"clip_duration": 3.0625}"#).unwrap();
/// assert_eq!(clip.clip_duration, 3.0625);
/// ```
pub fn parse_json<T>(json_str: &str) -> FabulaResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json_str).map_err(|e| {
        let preview = json_str.chars().take(100).collect::<String>();

        tracing::error!(
            error = %e,
            line = e.line(),
            column = e.column(),
            json_preview = %preview,
            "JSON parsing failed"
        );

        StoryError::new(StoryErrorKind::JsonParse {
            message: e.to_string(),
            line: e.line(),
            column: e.column(),
        })
        .into()
    })
}
