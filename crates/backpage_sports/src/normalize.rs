//! Normalization of raw TheSportsDB event payloads.

use backpage_core::{MatchRecord, TeamEntry};
use backpage_error::{BackpageResult, SourceError, SourceErrorKind};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value as JsonValue;

/// Response envelope of `eventslast.php`.
///
/// The API returns `{"results": null}` for teams with no logged events, so
/// the field is doubly optional.
#[derive(Debug, Deserialize)]
pub(crate) struct EventsLastResponse {
    #[serde(default)]
    pub(crate) results: Option<Vec<RawEvent>>,
}

/// One raw event as TheSportsDB reports it.
///
/// The raw object carries ~40 fields; only the ones the story pipeline
/// needs are decoded. Scores arrive inconsistently typed (string, number,
/// or null), so they are captured as raw JSON values and coerced later.
#[derive(Debug, Deserialize, Default)]
pub(crate) struct RawEvent {
    #[serde(rename = "strEvent")]
    pub(crate) event: Option<String>,
    #[serde(rename = "dateEvent")]
    pub(crate) date: Option<String>,
    #[serde(rename = "strVenue")]
    pub(crate) venue: Option<String>,
    #[serde(rename = "strHomeTeam")]
    pub(crate) home_team: Option<String>,
    #[serde(rename = "strAwayTeam")]
    pub(crate) away_team: Option<String>,
    #[serde(rename = "intHomeScore")]
    pub(crate) home_score: Option<JsonValue>,
    #[serde(rename = "intAwayScore")]
    pub(crate) away_score: Option<JsonValue>,
    #[serde(rename = "strHomeGoalDetails")]
    pub(crate) home_goal_details: Option<String>,
    #[serde(rename = "strAwayGoalDetails")]
    pub(crate) away_goal_details: Option<String>,
}

/// Coerce a score field that may be a string, a number, or null.
///
/// Unparseable values collapse to zero rather than failing the fetch; the
/// API reports in-progress fixtures with null scores.
fn coerce_score(value: &Option<JsonValue>) -> u32 {
    match value {
        Some(JsonValue::Number(n)) => u32::try_from(n.as_u64().unwrap_or(0)).unwrap_or(0),
        Some(JsonValue::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Reshape a raw event into the requesting team's perspective.
pub(crate) fn normalize(raw: &RawEvent, entry: &TeamEntry) -> BackpageResult<MatchRecord> {
    let home_team = raw.home_team.as_deref().unwrap_or_default();
    let away_team = raw.away_team.as_deref().unwrap_or_default();
    let home = entry.api_name().eq_ignore_ascii_case(home_team);

    let home_score = coerce_score(&raw.home_score);
    let away_score = coerce_score(&raw.away_score);

    let (team_score, opponent_score, opponent) = if home {
        (home_score, away_score, away_team)
    } else {
        (away_score, home_score, home_team)
    };

    let date_str = raw.date.as_deref().ok_or_else(|| {
        SourceError::new(SourceErrorKind::Decode(format!(
            "event for '{}' has no date",
            entry.name()
        )))
    })?;
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
        SourceError::new(SourceErrorKind::Decode(format!(
            "unparseable event date '{}': {}",
            date_str, e
        )))
    })?;

    let event = raw
        .event
        .clone()
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| format!("{} vs {}", home_team, away_team));

    // Goal details are football-specific; TheSportsDB leaves them null for
    // basketball.
    let detail = if entry.sport() == "football" {
        match (&raw.home_goal_details, &raw.away_goal_details) {
            (None, None) => None,
            (h, a) => Some(format!(
                "Home goal details: {}. Away goal details: {}.",
                h.as_deref().unwrap_or("none"),
                a.as_deref().unwrap_or("none"),
            )),
        }
    } else {
        None
    };

    MatchRecord::new(
        entry.name(),
        opponent,
        event,
        date,
        raw.venue.clone(),
        entry.sport(),
        entry.league(),
        home,
        team_score,
        opponent_score,
        detail,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use backpage_core::MatchOutcome;

    fn lakers() -> TeamEntry {
        TeamEntry::new(
            "lakers",
            "Los Angeles Lakers",
            "Los Angeles Lakers",
            "134867",
            "basketball",
            "NBA",
        )
    }

    fn manutd() -> TeamEntry {
        TeamEntry::new(
            "manutd",
            "Manchester United",
            "Manchester United",
            "133612",
            "football",
            "Premier League",
        )
    }

    #[test]
    fn away_fixture_flips_perspective() {
        let raw = RawEvent {
            event: Some("Boston Celtics vs Los Angeles Lakers".to_string()),
            date: Some("2026-02-13".to_string()),
            venue: Some("TD Garden".to_string()),
            home_team: Some("Boston Celtics".to_string()),
            away_team: Some("Los Angeles Lakers".to_string()),
            home_score: Some(serde_json::json!(104)),
            away_score: Some(serde_json::json!("124")),
            ..Default::default()
        };

        let record = normalize(&raw, &lakers()).unwrap();
        assert!(!record.home());
        assert_eq!(*record.team_score(), 124);
        assert_eq!(*record.opponent_score(), 104);
        assert_eq!(record.opponent(), "Boston Celtics");
        assert_eq!(*record.outcome(), MatchOutcome::Win);
        assert_eq!(*record.margin(), 20);
    }

    #[test]
    fn string_and_null_scores_coerced() {
        assert_eq!(coerce_score(&Some(serde_json::json!("2"))), 2);
        assert_eq!(coerce_score(&Some(serde_json::json!(3))), 3);
        assert_eq!(coerce_score(&Some(serde_json::json!(null))), 0);
        assert_eq!(coerce_score(&None), 0);
        assert_eq!(coerce_score(&Some(serde_json::json!("n/a"))), 0);
    }

    #[test]
    fn out_of_range_scores_collapse_to_zero() {
        assert_eq!(coerce_score(&Some(serde_json::json!(4_294_967_296u64))), 0);
        assert_eq!(coerce_score(&Some(serde_json::json!(-3))), 0);
    }

    #[test]
    fn goal_details_carried_for_football_only() {
        let mut raw = RawEvent {
            event: Some("Manchester United vs Arsenal".to_string()),
            date: Some("2026-08-22".to_string()),
            home_team: Some("Manchester United".to_string()),
            away_team: Some("Arsenal".to_string()),
            home_score: Some(serde_json::json!(2)),
            away_score: Some(serde_json::json!(0)),
            home_goal_details: Some("12' Fernandes; 77' Hojlund".to_string()),
            ..Default::default()
        };

        let record = normalize(&raw, &manutd()).unwrap();
        assert!(record.detail().as_deref().unwrap().contains("Fernandes"));

        raw.home_goal_details = None;
        let record = normalize(&raw, &manutd()).unwrap();
        assert!(record.detail().is_none());
    }

    #[test]
    fn missing_date_is_a_decode_error() {
        let raw = RawEvent {
            home_team: Some("Manchester United".to_string()),
            away_team: Some("Arsenal".to_string()),
            ..Default::default()
        };
        assert!(normalize(&raw, &manutd()).is_err());
    }

    #[test]
    fn missing_event_name_falls_back_to_team_names() {
        let raw = RawEvent {
            date: Some("2026-08-22".to_string()),
            home_team: Some("Manchester United".to_string()),
            away_team: Some("Arsenal".to_string()),
            home_score: Some(serde_json::json!(1)),
            away_score: Some(serde_json::json!(1)),
            ..Default::default()
        };
        let record = normalize(&raw, &manutd()).unwrap();
        assert_eq!(record.event(), "Manchester United vs Arsenal");
        assert_eq!(*record.outcome(), MatchOutcome::Draw);
    }
}
