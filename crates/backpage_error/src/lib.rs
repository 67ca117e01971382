//! Error types for the Backpage story generation pipeline.
//!
//! This crate provides the foundation error types used throughout the
//! Backpage workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use backpage_error::{BackpageResult, SourceError, SourceErrorKind};
//!
//! fn fetch_data() -> BackpageResult<String> {
//!     Err(SourceError::new(SourceErrorKind::Unavailable(
//!         "connection refused".to_string(),
//!     )))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod model;
mod source;
mod storage;
mod story;

pub use config::ConfigError;
pub use error::{BackpageError, BackpageErrorKind, BackpageResult};
pub use model::{ModelError, ModelErrorKind};
pub use source::{SourceError, SourceErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use story::{StoryError, StoryErrorKind};
