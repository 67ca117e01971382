//! Compiled generation request.

use crate::MatchOutcome;
use serde::{Deserialize, Serialize};

/// Narrative framing for a story, conditioned on the match outcome.
///
/// A win reads differently from a loss; the compiler selects the directive
/// and the request carries it as metadata so tests can assert on the branch
/// taken without string-matching the whole prompt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Tone {
    /// Bold, hype-the-fanbase framing for a win
    #[display("celebratory")]
    Celebratory,
    /// Honest, forward-looking framing for a loss
    #[display("resilient")]
    Resilient,
    /// Measured framing for a draw, built around a standout moment
    #[display("measured")]
    Measured,
}

impl From<MatchOutcome> for Tone {
    fn from(outcome: MatchOutcome) -> Self {
        match outcome {
            MatchOutcome::Win => Self::Celebratory,
            MatchOutcome::Loss => Self::Resilient,
            MatchOutcome::Draw => Self::Measured,
        }
    }
}

/// A rendered prompt plus generation metadata.
///
/// Compiled deterministically from one [`crate::MatchRecord`]; immutable and
/// consumed exactly once by the generation client. The prompt is split into
/// a `system` part (the persona) and a `user` part (match context, task, and
/// the literal output schema) to give the model a clean instruction
/// hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Standing persona brief sent as the system prompt
    pub system: String,
    /// Match context, task instructions, and output schema
    pub user: String,
    /// Target number of slides the model is asked for
    pub slide_count: usize,
    /// Result-conditioned tone directive embedded in the task section
    pub tone: Tone,
    /// Generation cap passed through to the provider
    pub max_tokens: u32,
}
