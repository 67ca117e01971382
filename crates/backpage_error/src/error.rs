//! Top-level error wrapper types.

use crate::{ConfigError, ModelError, SourceError, StorageError, StoryError};

/// The foundation error enum for the Backpage workspace.
///
/// # Examples
///
/// ```
/// use backpage_error::{BackpageError, ConfigError};
///
/// let config_err = ConfigError::new("missing field");
/// let err: BackpageError = config_err.into();
/// assert!(format!("{}", err).contains("Config Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum BackpageErrorKind {
    /// Match data acquisition error
    #[from(SourceError)]
    Source(SourceError),
    /// Generation service error
    #[from(ModelError)]
    Model(ModelError),
    /// Story validation error
    #[from(StoryError)]
    Story(StoryError),
    /// Persistence error
    #[from(StorageError)]
    Storage(StorageError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Backpage error with kind discrimination.
///
/// # Examples
///
/// ```
/// use backpage_error::{BackpageResult, ConfigError};
///
/// fn might_fail() -> BackpageResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Backpage Error: {}", _0)]
pub struct BackpageError(Box<BackpageErrorKind>);

impl BackpageError {
    /// Create a new error from a kind.
    pub fn new(kind: BackpageErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BackpageErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to BackpageErrorKind
impl<T> From<T> for BackpageError
where
    T: Into<BackpageErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Backpage operations.
///
/// # Examples
///
/// ```
/// use backpage_error::{BackpageResult, ConfigError};
///
/// fn load_key() -> BackpageResult<String> {
///     Err(ConfigError::new("ANTHROPIC_API_KEY not set"))?
/// }
/// ```
pub type BackpageResult<T> = std::result::Result<T, BackpageError>;
