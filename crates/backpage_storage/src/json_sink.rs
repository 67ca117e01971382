//! JSON file sink.

use async_trait::async_trait;
use backpage_core::{StoryPayload, TeamId};
use backpage_error::{BackpageResult, StorageError, StorageErrorKind};
use backpage_interface::StorySink;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Filesystem sink writing pretty-printed JSON.
///
/// Filenames follow `{team}_story_{YYYYMMDD_HHMMSS}.json`; the timestamp
/// keeps successive runs from overwriting each other.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    output_dir: PathBuf,
}

impl JsonFileSink {
    /// Create a sink rooted at the given output directory.
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory cannot be created.
    #[instrument(skip(output_dir))]
    pub fn new(output_dir: impl Into<PathBuf>) -> BackpageResult<Self> {
        let output_dir = output_dir.into();

        std::fs::create_dir_all(&output_dir).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                output_dir.display(),
                e
            )))
        })?;

        debug!(path = %output_dir.display(), "Created story output directory");
        Ok(Self { output_dir })
    }

    /// The configured output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[async_trait]
impl StorySink for JsonFileSink {
    #[instrument(skip(self, payload), fields(team = %team))]
    async fn persist(&self, team: &TeamId, payload: &StoryPayload) -> BackpageResult<PathBuf> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("{}_story_{}.json", team, timestamp);
        let path = self.output_dir.join(filename);

        let body = serde_json::to_string_pretty(payload)
            .map_err(|e| StorageError::new(StorageErrorKind::Serialize(e.to_string())))?;

        tokio::fs::write(&path, body).await.map_err(|e| {
            StorageError::new(StorageErrorKind::Write(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        debug!(path = %path.display(), "Story payload written");
        Ok(path)
    }
}
