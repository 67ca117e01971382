//! Filesystem persistence for validated story payloads.
//!
//! One validated payload in, one timestamped JSON file out. Nothing here
//! sees unvalidated data.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod json_sink;

pub use json_sink::JsonFileSink;
