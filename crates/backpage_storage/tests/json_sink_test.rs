//! Tests for the JSON file sink.

use backpage_core::{MatchOutcome, Slide, StoryPayload, TeamId};
use backpage_interface::StorySink;
use backpage_storage::JsonFileSink;
use chrono::NaiveDate;
use tempfile::TempDir;

fn payload() -> StoryPayload {
    StoryPayload::new(
        "Los Angeles Lakers",
        "Los Angeles Lakers vs Boston Celtics",
        NaiveDate::from_ymd_opt(2026, 2, 13).unwrap(),
        MatchOutcome::Win,
        vec![
            Slide::Headline {
                text: "STATEMENT MADE".to_string(),
                subtext: "Twenty-point statement in front of a sellout crowd".to_string(),
            },
            Slide::Cta {
                text: "More from Lakeshow Nation".to_string(),
                subtext: "Tap follow for every purple-and-gold moment 💜💛".to_string(),
            },
        ],
    )
}

#[tokio::test]
async fn writes_timestamped_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let sink = JsonFileSink::new(temp_dir.path()).unwrap();
    let team = TeamId::from("lakers");

    let path = sink.persist(&team, &payload()).await.unwrap();

    let filename = path.file_name().unwrap().to_str().unwrap();
    assert!(filename.starts_with("lakers_story_"));
    assert!(filename.ends_with(".json"));

    let written = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["team"], "Los Angeles Lakers");
    assert_eq!(value["result"], "WIN");
    assert_eq!(value["slides"][0]["type"], "headline");
}

#[tokio::test]
async fn distinct_teams_write_distinct_files() {
    let temp_dir = TempDir::new().unwrap();
    let sink = JsonFileSink::new(temp_dir.path()).unwrap();

    let a = sink.persist(&TeamId::from("lakers"), &payload()).await.unwrap();
    let b = sink.persist(&TeamId::from("manutd"), &payload()).await.unwrap();

    assert_ne!(a, b);
    assert!(a.exists());
    assert!(b.exists());
}

#[tokio::test]
async fn creates_nested_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("output").join("stories");

    let sink = JsonFileSink::new(&nested).unwrap();
    assert!(nested.exists());
    assert_eq!(sink.output_dir(), nested.as_path());
}

#[test]
fn round_trips_payload_through_disk_format() {
    let original = payload();
    let body = serde_json::to_string_pretty(&original).unwrap();
    let restored: StoryPayload = serde_json::from_str(&body).unwrap();
    assert_eq!(original, restored);
}
