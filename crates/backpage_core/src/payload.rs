//! The validated story payload.

use crate::{MatchOutcome, Slide};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validated Story content, the only artifact handed to the persistence
/// and render sinks.
///
/// Constructed solely by the story validator after every stage has passed;
/// fields are read-only thereafter. By contract the slide sequence is
/// non-empty, opens with a headline slide, and closes with a cta slide.
///
/// Wire shape:
///
/// ```json
/// {
///   "team": "Los Angeles Lakers",
///   "match": "Los Angeles Lakers vs Boston Celtics",
///   "date": "2026-02-13",
///   "result": "WIN",
///   "slides": [ ... ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StoryPayload {
    /// Team the story is about
    team: String,
    /// Human-readable fixture name
    #[serde(rename = "match")]
    matchup: String,
    /// Fixture date, ISO form on the wire
    date: NaiveDate,
    /// Outcome, cross-checked against the source match record
    result: MatchOutcome,
    /// Ordered slide sequence
    slides: Vec<Slide>,
}

impl StoryPayload {
    /// Assemble a payload from validated parts.
    pub fn new(
        team: impl Into<String>,
        matchup: impl Into<String>,
        date: NaiveDate,
        result: MatchOutcome,
        slides: Vec<Slide>,
    ) -> Self {
        Self {
            team: team.into(),
            matchup: matchup.into(),
            date,
            result,
            slides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_keys() {
        let payload = StoryPayload::new(
            "Los Angeles Lakers",
            "Los Angeles Lakers vs Boston Celtics",
            NaiveDate::from_ymd_opt(2026, 2, 13).unwrap(),
            MatchOutcome::Win,
            vec![Slide::Headline {
                text: "STATEMENT MADE".to_string(),
                subtext: "Twenty-point statement in front of a sellout crowd".to_string(),
            }],
        );

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["match"], "Los Angeles Lakers vs Boston Celtics");
        assert_eq!(value["date"], "2026-02-13");
        assert_eq!(value["result"], "WIN");
        assert!(value.get("matchup").is_none());
    }
}
