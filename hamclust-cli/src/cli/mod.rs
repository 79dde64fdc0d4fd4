//! Command-line interface orchestration for hamclust.
//!
//! The CLI reads a bit-string file (header line followed by one vector per
//! line), runs the Hamming-separation clustering pipeline, and prints the
//! cluster count.

mod commands;

pub use commands::{
    Cli, CliError, CliErrorCode, ExecutionSummary, OnMalformed, render_summary, run_cli,
};
