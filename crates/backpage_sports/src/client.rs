//! HTTP client for TheSportsDB.

use crate::normalize::{EventsLastResponse, normalize};
use async_trait::async_trait;
use backpage_core::{MatchRecord, TeamEntry};
use backpage_error::{BackpageResult, ConfigError, SourceError, SourceErrorKind};
use backpage_interface::MatchSource;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Base URL of TheSportsDB's free API tier ("123" is the public free key).
const SPORTS_DB_URL: &str = "https://www.thesportsdb.com/api/v1/json/123";

/// TheSportsDB API client.
#[derive(Debug, Clone)]
pub struct SportsDbClient {
    client: Client,
}

impl SportsDbClient {
    /// Creates a new client with a bounded request timeout.
    ///
    /// # Errors
    ///
    /// Returns a config error if the underlying HTTP client cannot be built.
    pub fn new(timeout: Duration) -> BackpageResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::new(format!("failed to build HTTP client: {}", e)))?;
        debug!("Creating new TheSportsDB client");
        Ok(Self { client })
    }

    /// Fetch the raw last-events envelope for a team.
    #[instrument(skip(self, team), fields(team = %team.name()))]
    async fn fetch_last_events(&self, team: &TeamEntry) -> BackpageResult<EventsLastResponse> {
        let url = format!("{}/eventslast.php?id={}", SPORTS_DB_URL, team.sports_db_id());
        debug!(url = %url, "Fetching last events");

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!(error = ?e, "Failed to reach TheSportsDB");
            SourceError::new(SourceErrorKind::Unavailable(format!("request failed: {}", e)))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            error!(status = %status, "TheSportsDB returned error status");
            return Err(SourceError::new(SourceErrorKind::Unavailable(format!(
                "HTTP status {}",
                status
            )))
            .into());
        }

        let body = response.bytes().await.map_err(|e| {
            SourceError::new(SourceErrorKind::Unavailable(format!(
                "failed to read response body: {}",
                e
            )))
        })?;

        // The API occasionally prefixes the body with a UTF-8 BOM.
        let body = body.strip_prefix(b"\xef\xbb\xbf".as_slice()).unwrap_or(&body);

        serde_json::from_slice(body).map_err(|e| {
            error!(error = %e, "Failed to decode TheSportsDB response");
            SourceError::new(SourceErrorKind::Decode(format!(
                "invalid response body: {}",
                e
            )))
            .into()
        })
    }
}

#[async_trait]
impl MatchSource for SportsDbClient {
    #[instrument(skip(self, team), fields(team = %team.name()))]
    async fn last_match(&self, team: &TeamEntry) -> BackpageResult<MatchRecord> {
        let envelope = self.fetch_last_events(team).await?;

        let results = envelope.results.unwrap_or_default();
        let raw = results.first().ok_or_else(|| {
            SourceError::new(SourceErrorKind::NoRecentMatch(team.name().clone()))
        })?;

        let record = normalize(raw, team)?;
        debug!(
            event = %record.event(),
            date = %record.date(),
            outcome = %record.outcome(),
            "Fetched and normalized last match"
        );
        Ok(record)
    }

    fn source_name(&self) -> &'static str {
        "thesportsdb"
    }
}
