//! Anthropic messages-API backend.
//!
//! This crate knows nothing about sports or slides. It has one job: send a
//! compiled [`backpage_core::GenerationRequest`] to the Anthropic API and
//! hand back the raw response text.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;

pub use anthropic::{AnthropicClient, DEFAULT_MODEL};
