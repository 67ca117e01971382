//! Backpage: schema-validated Story content from live match results.
//!
//! This facade crate re-exports the workspace's public surface and houses
//! the command-line interface.
//!
//! The pipeline, per team: fetch the most recent fixture from TheSportsDB,
//! compile a generation request, call the Anthropic messages API, run the
//! untrusted response through the staged story validator, and persist the
//! validated payload as timestamped JSON. Teams are independent failure
//! domains; one team's outage never stops another's story.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cli;

pub use backpage_core::{
    GenerationRequest, MatchOutcome, MatchRecord, Slide, StoryPayload, TeamEntry, TeamId,
    TeamRegistry, Tone,
};
pub use backpage_error::{
    BackpageError, BackpageErrorKind, BackpageResult, ConfigError, ModelError, ModelErrorKind,
    SourceError, SourceErrorKind, StorageError, StorageErrorKind, StoryError, StoryErrorKind,
};
pub use backpage_interface::{MatchSource, StoryModel, StorySink};
pub use backpage_models::{AnthropicClient, DEFAULT_MODEL};
pub use backpage_sports::SportsDbClient;
pub use backpage_storage::JsonFileSink;
pub use backpage_story::{BatchReport, StoryPipeline, TeamOutcome, TeamReport, compile, validate};
pub use cli::{Cli, Commands};
