//! Generated runners
//!
//! A runner is the cached, per-identity program that executes one solution
//! against one input and reconciles the result with the entry's lock state.
//! The `runner` file itself is a TOML manifest; it is executed by this same
//! binary through a hidden subcommand, so each run gets its own process.

mod generator;
mod manifest;
pub mod program;

pub use generator::RunnerGenerator;
pub use manifest::RunnerManifest;
pub use program::{parse_regression_line, Verdict, REGRESSION_MARKER};

/// Hidden subcommand that executes a runner manifest
pub const RUNNER_COMMAND: &str = "__runner";
