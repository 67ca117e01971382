//! Prompt compilation, story validation, and pipeline orchestration.
//!
//! This crate holds the heart of Backpage: turning a normalized
//! [`backpage_core::MatchRecord`] into a generation request, turning the
//! model's untrusted reply into a validated
//! [`backpage_core::StoryPayload`], and driving the per-team pipeline with
//! isolated failure domains.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod pipeline;
mod prompt;
mod report;
mod validate;

pub use pipeline::StoryPipeline;
pub use prompt::{MAX_TOKENS, SLIDE_COUNT, compile};
pub use report::{BatchReport, TeamOutcome, TeamReport};
pub use validate::validate;
