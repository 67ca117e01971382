//! Command-line interface for Backpage.
//!
//! Thin surface over the pipeline: select teams from the registry, run the
//! batch, report each team's outcome individually. The process exits 0 when
//! at least one team produced a story and 1 when every selection failed.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Backpage command-line interface.
#[derive(Debug, Parser)]
#[command(name = "backpage", version, about = "Sports Stories generator")]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a Story for one or more teams
    Run {
        /// Team key to generate for (repeatable); see `backpage teams`
        #[arg(long = "team", value_name = "KEY")]
        teams: Vec<String>,

        /// Generate for every registered team
        #[arg(long, conflicts_with = "teams")]
        all: bool,

        /// Directory for generated story JSON files
        #[arg(long, value_name = "DIR", default_value = "output")]
        output: PathBuf,

        /// Model identifier override
        #[arg(long, value_name = "NAME")]
        model: Option<String>,

        /// Timeout in seconds for each network call
        #[arg(long, value_name = "SECS", default_value_t = 30)]
        timeout: u64,
    },

    /// List the registered teams
    Teams,
}
