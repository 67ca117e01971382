//! Per-team and batch run reports.

use backpage_core::{MatchOutcome, TeamId};
use backpage_error::BackpageError;
use std::path::PathBuf;

/// Result of one team's pipeline run: a persisted story or a typed error.
///
/// There is no partial success. A team either yields a fully validated,
/// persisted payload, or it yields nothing but the error that stopped it.
#[derive(Debug)]
pub enum TeamOutcome {
    /// The full pipeline succeeded and the payload was persisted.
    Success {
        /// Human-readable fixture name from the payload
        matchup: String,
        /// Validated match outcome
        result: MatchOutcome,
        /// Where the payload was written
        path: PathBuf,
    },
    /// Some stage failed; no artifact was written for this team.
    Failure {
        /// The error that stopped the pipeline for this team
        error: BackpageError,
    },
}

impl TeamOutcome {
    /// Whether this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// One team's entry in a batch report.
#[derive(Debug, derive_getters::Getters)]
pub struct TeamReport {
    /// The selected team
    team: TeamId,
    /// What happened for that team
    outcome: TeamOutcome,
}

impl TeamReport {
    /// Pair a team with its outcome.
    pub fn new(team: TeamId, outcome: TeamOutcome) -> Self {
        Self { team, outcome }
    }
}

/// Collected outcomes of one batch run, in selection order.
///
/// # Examples
///
/// ```
/// use backpage_story::BatchReport;
///
/// let report = BatchReport::new(vec![]);
/// assert_eq!(report.succeeded(), 0);
/// assert!(!report.any_succeeded());
/// ```
#[derive(Debug, Default)]
pub struct BatchReport {
    reports: Vec<TeamReport>,
}

impl BatchReport {
    /// Build a report from collected team outcomes.
    pub fn new(reports: Vec<TeamReport>) -> Self {
        Self { reports }
    }

    /// Iterate per-team reports in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &TeamReport> {
        self.reports.iter()
    }

    /// Number of teams that produced a persisted story.
    pub fn succeeded(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.outcome().is_success())
            .count()
    }

    /// Number of teams that failed.
    pub fn failed(&self) -> usize {
        self.reports.len() - self.succeeded()
    }

    /// Whether at least one team succeeded (drives the process exit code).
    pub fn any_succeeded(&self) -> bool {
        self.succeeded() > 0
    }

    /// Number of teams in the batch.
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether the batch was empty.
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
