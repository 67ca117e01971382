//! Generation service error types.

/// Specific error conditions for text generation calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ModelErrorKind {
    /// Transport-level failure (connection, TLS, timeout)
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// Provider rejected the request or returned a non-success status
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code returned by the provider
        status: u16,
        /// Error body returned by the provider
        message: String,
    },
    /// Provider response body could not be decoded
    #[display("Failed to parse provider response: {}", _0)]
    Parse(String),
    /// Provider returned a response with no text content
    #[display("Provider returned no text content")]
    EmptyResponse,
}

/// Error type for generation service operations.
///
/// # Examples
///
/// ```
/// use backpage_error::{ModelError, ModelErrorKind};
///
/// let err = ModelError::new(ModelErrorKind::Api {
///     status: 429,
///     message: "rate limited".to_string(),
/// });
/// assert!(format!("{}", err).contains("429"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Model Error: {} at line {} in {}", kind, line, file)]
pub struct ModelError {
    /// The specific error condition
    pub kind: ModelErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ModelError {
    /// Create a new ModelError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModelErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
