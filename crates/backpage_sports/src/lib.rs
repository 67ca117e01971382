//! TheSportsDB match source.
//!
//! Fetches a team's most recent completed fixture from TheSportsDB's
//! `eventslast.php` endpoint and normalizes the raw event payload into a
//! [`backpage_core::MatchRecord`] seen from the requesting team's
//! perspective. This crate knows nothing about prompts or models; it only
//! knows about sports data.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod normalize;

pub use client::SportsDbClient;
