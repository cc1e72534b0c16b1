//! Error types for storyboard extraction and assembly.

/// Specific error conditions for storyboard generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoryErrorKind {
    /// Generated text contains no JSON object delimiters
    #[display("No JSON object found in response ({} chars)", _0)]
    MissingJson(usize),
    /// Text between the delimiters failed to parse as JSON
    #[display("Malformed JSON at line {} column {}: {}", line, column, message)]
    JsonParse {
        /// Parser error message
        message: String,
        /// Line of the parse failure within the candidate payload
        line: usize,
        /// Column of the parse failure within the candidate payload
        column: usize,
    },
    /// The backend returned an empty generation
    #[display("Model returned an empty response")]
    EmptyResponse,
}

/// Storyboard error with source location tracking.
///
/// # Examples
///
/// ```
/// use fabula_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::MissingJson(42));
/// assert!(format!("{}", err).contains("42 chars"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at line {} in {}", kind, line, file)]
pub struct StoryError {
    /// The specific error condition
    pub kind: StoryErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoryError {
    /// Create a new StoryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
