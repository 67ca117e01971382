//! Tests for the staged story validator.

use backpage_core::{MatchOutcome, MatchRecord};
use backpage_error::{BackpageError, BackpageErrorKind, StoryErrorKind};
use backpage_story::validate;
use chrono::NaiveDate;

fn united_win() -> MatchRecord {
    MatchRecord::new(
        "Manchester United",
        "Arsenal",
        "Manchester United vs Arsenal",
        NaiveDate::from_ymd_opt(2026, 8, 22).unwrap(),
        Some("Old Trafford".to_string()),
        "football",
        "Premier League",
        true,
        2,
        0,
        None,
    )
    .unwrap()
}

fn united_loss() -> MatchRecord {
    MatchRecord::new(
        "Manchester United",
        "Arsenal",
        "Manchester United vs Arsenal",
        NaiveDate::from_ymd_opt(2026, 8, 22).unwrap(),
        Some("Old Trafford".to_string()),
        "football",
        "Premier League",
        true,
        0,
        2,
        None,
    )
    .unwrap()
}

const VALID_STORY: &str = r#"{
  "team": "Manchester United",
  "match": "Manchester United vs Arsenal",
  "date": "2026-08-22",
  "result": "WIN",
  "slides": [
    {"type": "headline", "text": "GUNNERS SILENCED", "subtext": "A statement win under the lights at Old Trafford"},
    {"type": "stat", "stat_label": "FINAL SCORE", "stat_value": "2 - 0", "narrative": "Two second-half goals settled a tense derby."},
    {"type": "stat", "stat_label": "CLEAN SHEET", "stat_value": "0 conceded", "narrative": "The back line shut Arsenal out completely."},
    {"type": "cta", "text": "More from the Stretford End", "subtext": "Follow for every United moment 🔴"}
  ]
}"#;

fn story_kind(err: &BackpageError) -> &StoryErrorKind {
    match err.kind() {
        BackpageErrorKind::Story(story) => &story.kind,
        other => panic!("expected story error, got {:?}", other),
    }
}

#[test]
fn accepts_clean_response() {
    let payload = validate(VALID_STORY, &united_win()).unwrap();
    assert_eq!(payload.team(), "Manchester United");
    assert_eq!(*payload.result(), MatchOutcome::Win);
    assert_eq!(payload.slides().len(), 4);
    assert_eq!(payload.slides()[0].tag(), "headline");
    assert_eq!(payload.slides()[3].tag(), "cta");
}

#[test]
fn fence_stripping_round_trips() {
    let record = united_win();
    let unwrapped = validate(VALID_STORY, &record).unwrap();

    let fenced = format!("```json\n{}\n```", VALID_STORY);
    assert_eq!(validate(&fenced, &record).unwrap(), unwrapped);

    let bare_fence = format!("```\n{}\n```", VALID_STORY);
    assert_eq!(validate(&bare_fence, &record).unwrap(), unwrapped);
}

#[test]
fn tolerates_preamble_and_postamble() {
    let chatty = format!("Here you go:\n{}\nHope this helps!", VALID_STORY);
    let payload = validate(&chatty, &united_win()).unwrap();
    assert_eq!(payload.slides().len(), 4);
}

#[test]
fn no_json_object_is_malformed() {
    let err = validate("Sorry, I can't write that story.", &united_win()).unwrap_err();
    assert!(matches!(story_kind(&err), StoryErrorKind::MalformedOutput(_)));
}

#[test]
fn broken_json_is_malformed() {
    let err = validate("{\"team\": \"Manchester United\",}", &united_win()).unwrap_err();
    assert!(matches!(story_kind(&err), StoryErrorKind::MalformedOutput(_)));
}

#[test]
fn missing_top_level_field_names_the_field() {
    let raw = VALID_STORY.replacen("\"date\": \"2026-08-22\",", "", 1);
    let err = validate(&raw, &united_win()).unwrap_err();
    match story_kind(&err) {
        StoryErrorKind::SchemaViolation { field, .. } => assert_eq!(field, "date"),
        other => panic!("expected schema violation, got {:?}", other),
    }
}

#[test]
fn unknown_result_value_is_a_schema_violation() {
    let raw = VALID_STORY.replacen("\"WIN\"", "\"VICTORY\"", 1);
    let err = validate(&raw, &united_win()).unwrap_err();
    match story_kind(&err) {
        StoryErrorKind::SchemaViolation { field, .. } => assert_eq!(field, "result"),
        other => panic!("expected schema violation, got {:?}", other),
    }
}

#[test]
fn empty_slides_rejected() {
    let raw = r#"{
      "team": "Manchester United",
      "match": "Manchester United vs Arsenal",
      "date": "2026-08-22",
      "result": "WIN",
      "slides": []
    }"#;
    let err = validate(raw, &united_win()).unwrap_err();
    match story_kind(&err) {
        StoryErrorKind::SchemaViolation { field, .. } => assert_eq!(field, "slides"),
        other => panic!("expected schema violation, got {:?}", other),
    }
}

#[test]
fn unknown_slide_type_rejected_not_dropped() {
    let raw = VALID_STORY.replacen("\"type\": \"stat\"", "\"type\": \"poll\"", 1);
    let err = validate(&raw, &united_win()).unwrap_err();
    match story_kind(&err) {
        StoryErrorKind::SlideViolation { index, tag, .. } => {
            assert_eq!(*index, 1);
            assert_eq!(tag, "poll");
        }
        other => panic!("expected slide violation, got {:?}", other),
    }
}

#[test]
fn empty_slide_field_rejected() {
    let raw = VALID_STORY.replacen("\"GUNNERS SILENCED\"", "\"   \"", 1);
    let err = validate(&raw, &united_win()).unwrap_err();
    match story_kind(&err) {
        StoryErrorKind::SlideViolation { index, detail, .. } => {
            assert_eq!(*index, 0);
            assert!(detail.contains("text"));
        }
        other => panic!("expected slide violation, got {:?}", other),
    }
}

#[test]
fn first_slide_must_be_headline() {
    let raw = r#"{
      "team": "Manchester United",
      "match": "Manchester United vs Arsenal",
      "date": "2026-08-22",
      "result": "WIN",
      "slides": [
        {"type": "stat", "stat_label": "FINAL SCORE", "stat_value": "2 - 0", "narrative": "Comfortable in the end."},
        {"type": "cta", "text": "More from the Stretford End", "subtext": "Follow for more 🔴"}
      ]
    }"#;
    let err = validate(raw, &united_win()).unwrap_err();
    match story_kind(&err) {
        StoryErrorKind::SlideViolation { index, .. } => assert_eq!(*index, 0),
        other => panic!("expected slide violation, got {:?}", other),
    }
}

#[test]
fn last_slide_must_be_cta() {
    let raw = r#"{
      "team": "Manchester United",
      "match": "Manchester United vs Arsenal",
      "date": "2026-08-22",
      "result": "WIN",
      "slides": [
        {"type": "headline", "text": "GUNNERS SILENCED", "subtext": "A statement win at Old Trafford"},
        {"type": "stat", "stat_label": "FINAL SCORE", "stat_value": "2 - 0", "narrative": "Comfortable in the end."}
      ]
    }"#;
    let err = validate(raw, &united_win()).unwrap_err();
    match story_kind(&err) {
        StoryErrorKind::SlideViolation { index, .. } => assert_eq!(*index, 1),
        other => panic!("expected slide violation, got {:?}", other),
    }
}

#[test]
fn invented_outcome_is_a_consistency_violation() {
    // The model claims a WIN but the fetched record says LOSS.
    let err = validate(VALID_STORY, &united_loss()).unwrap_err();
    match story_kind(&err) {
        StoryErrorKind::ConsistencyViolation { field, expected, found } => {
            assert_eq!(*field, "result");
            assert_eq!(expected, "LOSS");
            assert_eq!(found, "WIN");
        }
        other => panic!("expected consistency violation, got {:?}", other),
    }
}

#[test]
fn wrong_team_is_a_consistency_violation() {
    let raw = VALID_STORY.replacen(
        "\"team\": \"Manchester United\"",
        "\"team\": \"Manchester City\"",
        1,
    );
    let err = validate(&raw, &united_win()).unwrap_err();
    match story_kind(&err) {
        StoryErrorKind::ConsistencyViolation { field, .. } => assert_eq!(*field, "team"),
        other => panic!("expected consistency violation, got {:?}", other),
    }
}

#[test]
fn team_cross_check_tolerates_case_and_whitespace() {
    let raw = VALID_STORY.replacen(
        "\"team\": \"Manchester United\"",
        "\"team\": \"  MANCHESTER UNITED \"",
        1,
    );
    let payload = validate(&raw, &united_win()).unwrap();
    assert_eq!(*payload.result(), MatchOutcome::Win);
}
