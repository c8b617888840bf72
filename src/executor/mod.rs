//! Runner execution
//!
//! Runs a generated runner in its own process and classifies what happened:
//!
//! - exit 0 without a regression line: passed
//! - exit 0 with a regression line on stdout: failed (locked result changed)
//! - non-zero exit, signal, or spawn failure: errored

mod process;

pub use process::ProcessExecutor;

use crate::error::AocResult;
use crate::runner::REGRESSION_MARKER;
use async_trait::async_trait;
use std::fmt;
use std::path::Path;

/// Classified result of one runner execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Passed,
    /// The runner reported a locked result mismatch
    Failed { detail: String },
    /// The runner crashed or could not be started
    Errored { reason: String },
}

impl RunStatus {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => write!(f, "passed"),
            Self::Failed { detail } => write!(f, "failed: {}", detail),
            Self::Errored { reason } => write!(f, "errored: {}", reason),
        }
    }
}

/// Status plus the runner's stdout lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub status: RunStatus,
    pub stdout: Vec<String>,
}

impl RunReport {
    pub fn errored(reason: impl Into<String>) -> Self {
        Self {
            status: RunStatus::Errored {
                reason: reason.into(),
            },
            stdout: Vec::new(),
        }
    }
}

/// Executes runner files
///
/// The process implementation re-invokes this binary; tests substitute
/// scripted executors.
#[async_trait]
pub trait PuzzleExecutor: Send + Sync {
    /// Run with the runner's output shown on the terminal as it happens
    ///
    /// Errors only when the runner could not be started at all.
    async fn run_interactive(&self, runner: &Path) -> AocResult<RunReport>;

    /// Run with all output captured; never fails, problems become `Errored`
    async fn run_captured(&self, runner: &Path) -> RunReport;
}

/// Classify a finished runner from its exit and output
///
/// `exit` is `None` on a successful exit, otherwise a description of the
/// failure (`exit status: 1`, `signal: 9`).
pub(crate) fn classify(exit: Option<String>, stdout: &[String], stderr: &[String]) -> RunStatus {
    if let Some(exit) = exit {
        let cause = stderr
            .iter()
            .map(|line| console::strip_ansi_codes(line).trim().to_string())
            .find(|line| !line.is_empty());
        let reason = match cause {
            Some(cause) => {
                let cause = cause
                    .strip_prefix(REGRESSION_MARKER)
                    .map(str::trim_start)
                    .unwrap_or(cause.as_str());
                format!("{}: {}", exit, cause)
            }
            None => exit,
        };
        return RunStatus::Errored { reason };
    }

    match stdout.iter().find(|line| line.starts_with(REGRESSION_MARKER)) {
        Some(line) => RunStatus::Failed {
            detail: line
                .trim_start_matches(REGRESSION_MARKER)
                .trim()
                .to_string(),
        },
        None => RunStatus::Passed,
    }
}
