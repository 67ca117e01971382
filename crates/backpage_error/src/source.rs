//! Match data source error types.

/// Specific error conditions for match data acquisition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SourceErrorKind {
    /// Sports data API unreachable (network failure, timeout, or HTTP error)
    #[display("Sports data source unavailable: {}", _0)]
    Unavailable(String),
    /// Team exists but has no fetchable match history
    #[display("No recent match data found for '{}'", _0)]
    NoRecentMatch(String),
    /// Team key not present in the registry
    #[display("Unknown team '{}'", _0)]
    UnknownTeam(String),
    /// Response body could not be decoded into a match record
    #[display("Failed to decode source response: {}", _0)]
    Decode(String),
}

/// Error type for match data source operations.
///
/// # Examples
///
/// ```
/// use backpage_error::{SourceError, SourceErrorKind};
///
/// let err = SourceError::new(SourceErrorKind::NoRecentMatch("lakers".to_string()));
/// assert!(format!("{}", err).contains("lakers"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Source Error: {} at line {} in {}", kind, line, file)]
pub struct SourceError {
    /// The specific error condition
    pub kind: SourceErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SourceError {
    /// Create a new SourceError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SourceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
