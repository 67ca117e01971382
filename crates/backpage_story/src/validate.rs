//! Story validator.
//!
//! The quality gate between the generation backend and everything
//! downstream. Validation runs in stages (syntactic, structural, semantic,
//! cross-check) and short-circuits on the first failure, so an error
//! message names the exact stage that rejected the response.

use crate::extraction::{extract_object, strip_fences};
use backpage_core::{MatchOutcome, MatchRecord, Slide, StoryPayload};
use backpage_error::{BackpageResult, StoryError, StoryErrorKind};
use chrono::NaiveDate;
use serde_json::{Map, Value as JsonValue};
use tracing::debug;

/// Validate a raw model response against the match record it was generated
/// from, producing the immutable story payload.
///
/// Stages, in order:
/// 1. Fence stripping
/// 2. Boundary extraction (first `{` to last `}`)
/// 3. Structural JSON parse
/// 4. Top-level schema validation
/// 5. Per-slide validation (closed tag set, non-empty required fields)
/// 6. Slide ordering contract (headline first, cta last)
/// 7. Cross-check against the match record (team and result)
///
/// Downstream consumers trust the payload unconditionally; a generated
/// outcome that contradicts the fetched record must not pass the cross-check.
///
/// # Errors
///
/// Fails with `MalformedOutput`, `SchemaViolation`, `SlideViolation`, or
/// `ConsistencyViolation` depending on the stage that rejected the response.
pub fn validate(raw: &str, expected: &MatchRecord) -> BackpageResult<StoryPayload> {
    let cleaned = strip_fences(raw);
    let object_text = extract_object(cleaned)?;

    let document: JsonValue = serde_json::from_str(object_text).map_err(|e| {
        StoryError::new(StoryErrorKind::MalformedOutput(format!(
            "response is not valid JSON: {}",
            e
        )))
    })?;

    let story = document.as_object().ok_or_else(|| {
        StoryError::new(StoryErrorKind::MalformedOutput(
            "response is not a JSON object".to_string(),
        ))
    })?;

    let team = require_string(story, "team")?;
    let matchup = require_string(story, "match")?;

    let date_str = require_string(story, "date")?;
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
        StoryError::new(StoryErrorKind::SchemaViolation {
            field: "date".to_string(),
            detail: format!("expected YYYY-MM-DD, found '{}'", date_str),
        })
    })?;

    let result_str = require_string(story, "result")?;
    let result = MatchOutcome::parse(result_str).ok_or_else(|| {
        StoryError::new(StoryErrorKind::SchemaViolation {
            field: "result".to_string(),
            detail: format!("expected one of WIN, LOSS, DRAW; found '{}'", result_str),
        })
    })?;

    let raw_slides = story
        .get("slides")
        .ok_or_else(|| missing_field("slides"))?
        .as_array()
        .ok_or_else(|| {
            StoryError::new(StoryErrorKind::SchemaViolation {
                field: "slides".to_string(),
                detail: "expected an array".to_string(),
            })
        })?;
    if raw_slides.is_empty() {
        return Err(StoryError::new(StoryErrorKind::SchemaViolation {
            field: "slides".to_string(),
            detail: "slide sequence is empty".to_string(),
        })
        .into());
    }

    let slides = raw_slides
        .iter()
        .enumerate()
        .map(|(index, value)| validate_slide(index, value))
        .collect::<Result<Vec<Slide>, StoryError>>()?;

    // Content contract: a story opens with a headline and closes with a cta.
    if slides[0].tag() != "headline" {
        return Err(StoryError::new(StoryErrorKind::SlideViolation {
            index: 0,
            tag: slides[0].tag().to_string(),
            detail: "first slide must be a headline".to_string(),
        })
        .into());
    }
    let last = slides.len() - 1;
    if slides[last].tag() != "cta" {
        return Err(StoryError::new(StoryErrorKind::SlideViolation {
            index: last,
            tag: slides[last].tag().to_string(),
            detail: "last slide must be a cta".to_string(),
        })
        .into());
    }

    cross_check(team, result, expected)?;

    debug!(
        slide_count = slides.len(),
        team = %team,
        "Story validated"
    );

    Ok(StoryPayload::new(team, matchup, date, result, slides))
}

/// Require a top-level field to be present and a string.
fn require_string<'a>(story: &'a Map<String, JsonValue>, field: &str) -> Result<&'a str, StoryError> {
    story
        .get(field)
        .ok_or_else(|| missing_field(field))?
        .as_str()
        .ok_or_else(|| {
            StoryError::new(StoryErrorKind::SchemaViolation {
                field: field.to_string(),
                detail: "expected a string".to_string(),
            })
        })
}

fn missing_field(field: &str) -> StoryError {
    StoryError::new(StoryErrorKind::SchemaViolation {
        field: field.to_string(),
        detail: "required field is missing".to_string(),
    })
}

/// Validate one slide entry against the closed tag set.
///
/// Unrecognized tags are rejected, not dropped.
fn validate_slide(index: usize, value: &JsonValue) -> Result<Slide, StoryError> {
    let entry = value.as_object().ok_or_else(|| {
        StoryError::new(StoryErrorKind::SlideViolation {
            index,
            tag: "<none>".to_string(),
            detail: "slide is not a JSON object".to_string(),
        })
    })?;

    let tag = entry.get("type").and_then(JsonValue::as_str).ok_or_else(|| {
        StoryError::new(StoryErrorKind::SlideViolation {
            index,
            tag: "<none>".to_string(),
            detail: "slide has no 'type' tag".to_string(),
        })
    })?;

    let slide = match tag {
        "headline" => Slide::Headline {
            text: slide_field(index, tag, entry, "text")?,
            subtext: slide_field(index, tag, entry, "subtext")?,
        },
        "stat" => Slide::Stat {
            stat_label: slide_field(index, tag, entry, "stat_label")?,
            stat_value: slide_field(index, tag, entry, "stat_value")?,
            narrative: slide_field(index, tag, entry, "narrative")?,
        },
        "cta" => Slide::Cta {
            text: slide_field(index, tag, entry, "text")?,
            subtext: slide_field(index, tag, entry, "subtext")?,
        },
        other => {
            return Err(StoryError::new(StoryErrorKind::SlideViolation {
                index,
                tag: other.to_string(),
                detail: "unrecognized slide type; expected headline, stat, or cta".to_string(),
            }));
        }
    };

    Ok(slide)
}

/// Require a slide field to be present, a string, and non-empty after
/// trimming.
fn slide_field(
    index: usize,
    tag: &str,
    entry: &Map<String, JsonValue>,
    field: &str,
) -> Result<String, StoryError> {
    let text = entry
        .get(field)
        .and_then(JsonValue::as_str)
        .ok_or_else(|| {
            StoryError::new(StoryErrorKind::SlideViolation {
                index,
                tag: tag.to_string(),
                detail: format!("missing required field '{}'", field),
            })
        })?;

    if text.trim().is_empty() {
        return Err(StoryError::new(StoryErrorKind::SlideViolation {
            index,
            tag: tag.to_string(),
            detail: format!("field '{}' is empty", field),
        }));
    }

    Ok(text.to_string())
}

/// Verify the generated content agrees with the fetched fact.
fn cross_check(team: &str, result: MatchOutcome, expected: &MatchRecord) -> Result<(), StoryError> {
    if !team.trim().eq_ignore_ascii_case(expected.team().trim()) {
        return Err(StoryError::new(StoryErrorKind::ConsistencyViolation {
            field: "team",
            expected: expected.team().clone(),
            found: team.to_string(),
        }));
    }

    if result != *expected.outcome() {
        return Err(StoryError::new(StoryErrorKind::ConsistencyViolation {
            field: "result",
            expected: expected.outcome().to_string(),
            found: result.to_string(),
        }));
    }

    Ok(())
}
