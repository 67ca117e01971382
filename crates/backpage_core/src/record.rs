//! Normalized match record.

use crate::MatchOutcome;
use backpage_error::{BackpageResult, SourceError, SourceErrorKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Immutable fact about one completed fixture, normalized into the
/// requesting team's perspective.
///
/// The outcome and margin are derived from the score pair at construction,
/// so a record can never claim a result inconsistent with its score. The
/// record is read-only after construction and is never persisted directly.
///
/// # Examples
///
/// ```
/// use backpage_core::{MatchOutcome, MatchRecord};
/// use chrono::NaiveDate;
///
/// let record = MatchRecord::new(
///     "Los Angeles Lakers",
///     "Boston Celtics",
///     "Los Angeles Lakers vs Boston Celtics",
///     NaiveDate::from_ymd_opt(2026, 2, 13).unwrap(),
///     Some("Crypto.com Arena".to_string()),
///     "basketball",
///     "NBA",
///     true,
///     124,
///     104,
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(*record.outcome(), MatchOutcome::Win);
/// assert_eq!(*record.margin(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct MatchRecord {
    /// Display name of the requesting team
    team: String,
    /// Display name of the opposing team
    opponent: String,
    /// Human-readable fixture name, e.g. "Manchester United vs Arsenal"
    event: String,
    /// Calendar date the fixture was played
    date: NaiveDate,
    /// Venue name when the source provides one
    venue: Option<String>,
    /// Sport discipline, carried from the team registry
    sport: String,
    /// Competition name, carried from the team registry
    league: String,
    /// Whether the requesting team played at home
    home: bool,
    /// Requesting team's score
    team_score: u32,
    /// Opposing team's score
    opponent_score: u32,
    /// Outcome derived from the score pair
    outcome: MatchOutcome,
    /// Absolute score difference, derived
    margin: u32,
    /// Sport-specific detail line (e.g. goal scorers) when available
    detail: Option<String>,
}

impl MatchRecord {
    /// Construct a record, deriving the outcome and margin from the scores.
    ///
    /// # Errors
    ///
    /// Returns a decode error when the team name is empty.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        team: impl Into<String>,
        opponent: impl Into<String>,
        event: impl Into<String>,
        date: NaiveDate,
        venue: Option<String>,
        sport: impl Into<String>,
        league: impl Into<String>,
        home: bool,
        team_score: u32,
        opponent_score: u32,
        detail: Option<String>,
    ) -> BackpageResult<Self> {
        let team = team.into();
        if team.trim().is_empty() {
            return Err(SourceError::new(SourceErrorKind::Decode(
                "team name is empty".to_string(),
            ))
            .into());
        }

        Ok(Self {
            team,
            opponent: opponent.into(),
            event: event.into(),
            date,
            venue: venue.filter(|v| !v.trim().is_empty()),
            sport: sport.into(),
            league: league.into(),
            home,
            team_score,
            opponent_score,
            outcome: MatchOutcome::from_scores(team_score, opponent_score),
            margin: team_score.abs_diff(opponent_score),
            detail,
        })
    }

    /// Score line from the team's perspective, e.g. "Lakers 124 - 104 Celtics".
    pub fn score_line(&self) -> String {
        format!(
            "{} {} - {} {}",
            self.team, self.team_score, self.opponent_score, self.opponent
        )
    }
}
