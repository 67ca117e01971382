//! Story validation error types.
//!
//! Validation is staged (syntactic, structural, semantic, cross-check), and
//! each stage has its own kind so a failure message names the stage that
//! rejected the response.

/// Specific error conditions for story validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoryErrorKind {
    /// No parseable JSON object found in the model response
    #[display("Malformed model output: {}", _0)]
    MalformedOutput(String),
    /// Required top-level field missing or of the wrong type
    #[display("Schema violation on field '{}': {}", field, detail)]
    SchemaViolation {
        /// Name of the missing or mistyped field
        field: String,
        /// What was expected versus what was found
        detail: String,
    },
    /// A slide is missing required fields or carries an unrecognized tag
    #[display("Slide violation at index {} (type '{}'): {}", index, tag, detail)]
    SlideViolation {
        /// Zero-based position of the offending slide
        index: usize,
        /// The slide's declared type tag
        tag: String,
        /// What was expected versus what was found
        detail: String,
    },
    /// Generated content contradicts the fetched match record
    #[display(
        "Consistency violation on '{}': expected '{}', model claimed '{}'",
        field,
        expected,
        found
    )]
    ConsistencyViolation {
        /// The cross-checked field
        field: &'static str,
        /// Value computed from the match record
        expected: String,
        /// Value claimed by the model
        found: String,
    },
}

/// Error type for story validation.
///
/// # Examples
///
/// ```
/// use backpage_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::SlideViolation {
///     index: 2,
///     tag: "poll".to_string(),
///     detail: "unrecognized slide type".to_string(),
/// });
/// assert!(format!("{}", err).contains("poll"));
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
