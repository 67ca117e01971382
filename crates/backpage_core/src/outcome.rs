//! Match outcome from the requesting team's perspective.

use serde::{Deserialize, Serialize};

/// Result of a fixture from the requesting team's perspective.
///
/// Serialized in ALL CAPS to match the wire contract of the story payload.
///
/// # Examples
///
/// ```
/// use backpage_core::MatchOutcome;
///
/// let outcome = MatchOutcome::from_scores(2, 0);
/// assert_eq!(outcome, MatchOutcome::Win);
/// assert_eq!(outcome.as_str(), "WIN");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchOutcome {
    /// Team scored more than the opponent
    #[display("WIN")]
    Win,
    /// Team scored less than the opponent
    #[display("LOSS")]
    Loss,
    /// Scores level at full time (only valid for sports permitting ties)
    #[display("DRAW")]
    Draw,
}

impl MatchOutcome {
    /// Derive the outcome from a score pair.
    pub fn from_scores(team_score: u32, opponent_score: u32) -> Self {
        if team_score > opponent_score {
            Self::Win
        } else if team_score < opponent_score {
            Self::Loss
        } else {
            Self::Draw
        }
    }

    /// The wire representation of this outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Win => "WIN",
            Self::Loss => "LOSS",
            Self::Draw => "DRAW",
        }
    }

    /// Parse a wire representation, returning `None` for unrecognized values.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "WIN" => Some(Self::Win),
            "LOSS" => Some(Self::Loss),
            "DRAW" => Some(Self::Draw),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_is_consistent_with_scores() {
        assert_eq!(MatchOutcome::from_scores(3, 1), MatchOutcome::Win);
        assert_eq!(MatchOutcome::from_scores(0, 2), MatchOutcome::Loss);
        assert_eq!(MatchOutcome::from_scores(1, 1), MatchOutcome::Draw);
    }

    #[test]
    fn serializes_all_caps() {
        let json = serde_json::to_string(&MatchOutcome::Loss).unwrap();
        assert_eq!(json, "\"LOSS\"");
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(MatchOutcome::parse("WIN"), Some(MatchOutcome::Win));
        assert_eq!(MatchOutcome::parse(" DRAW "), Some(MatchOutcome::Draw));
        assert_eq!(MatchOutcome::parse("VICTORY"), None);
    }
}
