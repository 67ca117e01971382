//! Persistence sink error types.

/// Specific error conditions for persisting validated payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Output directory could not be created
    #[display("Failed to create output directory: {}", _0)]
    DirectoryCreation(String),
    /// Payload could not be serialized to JSON
    #[display("Failed to serialize payload: {}", _0)]
    Serialize(String),
    /// Output file could not be written
    #[display("Failed to write output file: {}", _0)]
    Write(String),
}

/// Error type for persistence operations.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The specific error condition
    pub kind: StorageErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StorageError {
    /// Create a new StorageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
