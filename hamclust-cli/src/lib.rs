//! Library surface of the hamclust CLI.
//!
//! Splitting the CLI into a library crate keeps argument parsing, execution,
//! and rendering unit-testable without spawning the binary.

pub mod cli;
pub mod logging;
