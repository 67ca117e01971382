//! Trait seams between the Backpage pipeline and its external collaborators.
//!
//! The pipeline is programmed against these traits rather than concrete
//! clients, so the match source, the generation backend, and the persistence
//! sink can each be swapped or mocked independently.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{MatchSource, StoryModel, StorySink};
