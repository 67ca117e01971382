//! Pipeline orchestration.
//!
//! Sequences fetch → compile → generate → validate → persist per team.
//! Teams are independent units with isolated failure domains: every error
//! is caught at the per-team boundary and recorded in the batch report, and
//! persistence only happens after full validation, so no partial story is
//! ever written.

use crate::report::{BatchReport, TeamOutcome, TeamReport};
use crate::{prompt, validate};
use backpage_core::{TeamId, TeamRegistry};
use backpage_error::{BackpageResult, SourceError, SourceErrorKind};
use backpage_interface::{MatchSource, StoryModel, StorySink};
use tracing::{error, info, instrument};

/// Drives the story pipeline for a set of selected teams.
///
/// The pipeline owns its collaborators and an explicit team registry passed
/// in at construction; there is no ambient configuration. Teams run
/// sequentially, and a run can only stop between teams, never mid-team.
pub struct StoryPipeline<S, M, K> {
    source: S,
    model: M,
    sink: K,
    registry: TeamRegistry,
}

impl<S, M, K> StoryPipeline<S, M, K>
where
    S: MatchSource,
    M: StoryModel,
    K: StorySink,
{
    /// Assemble a pipeline from its collaborators and team registry.
    pub fn new(source: S, model: M, sink: K, registry: TeamRegistry) -> Self {
        Self {
            source,
            model,
            sink,
            registry,
        }
    }

    /// The configured team registry.
    pub fn registry(&self) -> &TeamRegistry {
        &self.registry
    }

    /// Run the pipeline for each selected team, collecting one outcome per
    /// team in selection order.
    ///
    /// A failure for one team never aborts the others; the baseline design
    /// performs no retry of the generation call on validation failure.
    pub async fn run(&self, selections: &[TeamId]) -> BatchReport {
        let mut reports = Vec::with_capacity(selections.len());

        for team in selections {
            let outcome = match self.run_team(team).await {
                Ok(outcome) => outcome,
                Err(err) => {
                    error!(team = %team, error = %err, "Pipeline failed for team");
                    TeamOutcome::Failure { error: err }
                }
            };
            reports.push(TeamReport::new(team.clone(), outcome));
        }

        BatchReport::new(reports)
    }

    /// One team's full sub-pipeline, run to completion.
    #[instrument(skip(self, team), fields(team = %team))]
    async fn run_team(&self, team: &TeamId) -> BackpageResult<TeamOutcome> {
        let entry = self.registry.get(team).ok_or_else(|| {
            SourceError::new(SourceErrorKind::UnknownTeam(team.as_str().to_string()))
        })?;

        let record = self.source.last_match(entry).await?;
        info!(
            event = %record.event(),
            outcome = %record.outcome(),
            "Fetched match record"
        );

        let request = prompt::compile(&record);
        let raw = self.model.generate(&request).await?;
        info!(
            provider = self.model.provider_name(),
            model = self.model.model_name(),
            response_length = raw.len(),
            "Received model response"
        );

        let payload = validate(&raw, &record)?;
        let path = self.sink.persist(team, &payload).await?;
        info!(path = %path.display(), "Story persisted");

        Ok(TeamOutcome::Success {
            matchup: payload.matchup().clone(),
            result: *payload.result(),
            path,
        })
    }
}
