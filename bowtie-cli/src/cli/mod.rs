//! Command-line interface for sampling bow-tie graphs.
//!
//! The `sample` command draws a graph from the given parameters and reports
//! its size, reciprocity, and node type shares.

mod commands;

pub use commands::{Cli, CliError, Command, SampleCommand, SampleSummary, render_summary, run_cli};
