//! Error types for aoc
//!
//! All modules use `AocResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for aoc operations
pub type AocResult<T> = Result<T, AocError>;

/// All errors that can occur in aoc
#[derive(Error, Debug)]
pub enum AocError {
    // Input errors, raised before any cache mutation
    #[error("Invalid puzzle: {0}")]
    InvalidPuzzle(String),

    #[error("{0} does not exist")]
    SolutionNotFound(String),

    #[error("Input file {input} does not exist for {puzzle}")]
    InputNotFound { puzzle: String, input: PathBuf },

    #[error("Malformed cache key {id:?}: {reason}")]
    MalformedKey { id: String, reason: String },

    // Cache errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cache entry {0} is incomplete")]
    CacheEntryIncomplete(String),

    #[error("Invalid runner manifest {path}: {reason}")]
    RunnerInvalid { path: PathBuf, reason: String },

    // Verification outcomes
    #[error("Regression: res: {got}, want {want}")]
    Regression { got: String, want: String },

    // Execution errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Runner exited with {status}")]
    RunnerExit { status: String },

    #[error("Solution for {puzzle} failed: {reason}")]
    SolutionFailed { puzzle: String, reason: String },

    #[error("{failed} of {total} locked puzzles did not verify")]
    CheckFailed { failed: usize, total: usize },

    // Remote errors
    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Session token rejected by server")]
    Unauthorized,

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Unrecognized server response: {0}")]
    UnrecognizedResponse(String),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    User(String),
}

impl AocError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Check if the error is a locked result mismatch
    pub fn is_regression(&self) -> bool {
        matches!(self, Self::Regression { .. })
    }

    /// Check if the error was raised while validating a request
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPuzzle(_)
                | Self::SolutionNotFound(_)
                | Self::InputNotFound { .. }
                | Self::MalformedKey { .. }
        )
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::InputNotFound { .. } => Some("Run: aoc input -d DAY (requires login)"),
            Self::SolutionNotFound(_) => Some("Register the solution in src/solutions"),
            Self::NotLoggedIn => Some("Run: aoc login --session TOKEN"),
            Self::Unauthorized => Some("Copy a fresh session cookie and run: aoc login"),
            Self::CacheEntryIncomplete(_) => Some("Run: aoc cache clear"),
            Self::RunnerInvalid { .. } => Some("Run: aoc cache clear"),
            e if e.is_regression() => Some("If the new result is right, run: aoc unlock"),
            Self::CheckFailed { .. } => Some("Run the failing puzzle with: aoc run -y YEAR -d DAY -p PART"),
            _ => None,
        }
    }
}
