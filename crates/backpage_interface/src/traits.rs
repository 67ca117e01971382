//! Trait definitions for the pipeline's collaborators.

use async_trait::async_trait;
use backpage_core::{GenerationRequest, MatchRecord, StoryPayload, TeamEntry, TeamId};
use backpage_error::BackpageResult;
use std::path::PathBuf;

/// Supplies the most recent completed fixture for a configured team.
///
/// Implementations normalize whatever the upstream API returns into a
/// [`MatchRecord`] seen from the requesting team's perspective.
#[async_trait]
pub trait MatchSource: Send + Sync {
    /// Fetch and normalize the team's most recent completed fixture.
    ///
    /// # Errors
    ///
    /// Fails with a source error: unavailable (network/timeout/HTTP status),
    /// no recent match, or a response that cannot be decoded.
    async fn last_match(&self, team: &TeamEntry) -> BackpageResult<MatchRecord>;

    /// Source name for logging (e.g., "thesportsdb").
    fn source_name(&self) -> &'static str;
}

/// Executes a compiled generation request against a text-generation backend.
///
/// The returned text is untrusted: it may wrap the JSON object in code
/// fences or surround it with prose. The story validator owns cleaning and
/// validating it.
#[async_trait]
pub trait StoryModel: Send + Sync {
    /// Generate raw story text for a compiled request.
    ///
    /// # Errors
    ///
    /// Fails with a model error on transport failure, a provider-side
    /// rejection, or an undecodable/empty provider response.
    async fn generate(&self, request: &GenerationRequest) -> BackpageResult<String>;

    /// Provider name for logging (e.g., "anthropic").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "claude-sonnet-4-5").
    fn model_name(&self) -> &str;
}

/// Consumes one validated story payload.
///
/// Only fully validated payloads reach a sink; a sink never sees a partial
/// story. Writes are named distinctly per run so successive runs never
/// overwrite each other.
#[async_trait]
pub trait StorySink: Send + Sync {
    /// Persist the payload for the given team, returning the artifact path.
    ///
    /// # Errors
    ///
    /// Fails with a storage error when the artifact cannot be written.
    async fn persist(&self, team: &TeamId, payload: &StoryPayload) -> BackpageResult<PathBuf>;
}
