//! Core data types for the Backpage story generation pipeline.
//!
//! This crate provides the foundation data types shared across the
//! workspace: the normalized match record, the compiled generation request,
//! the typed slide variants, the validated story payload, and the explicit
//! team registry that replaces ambient configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod outcome;
mod payload;
mod record;
mod registry;
mod request;
mod slide;

pub use outcome::MatchOutcome;
pub use payload::StoryPayload;
pub use record::MatchRecord;
pub use registry::{TeamEntry, TeamId, TeamRegistry};
pub use request::{GenerationRequest, Tone};
pub use slide::Slide;
