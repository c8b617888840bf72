//! Configuration for aoc
//!
//! There is no configuration file. Everything is resolved once at startup
//! from the environment and command-line flags, then threaded explicitly
//! into the components that need it.

use crate::error::{AocError, AocResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the cache root
pub const CACHE_ENV: &str = "AOC_CACHE";

/// Environment variable overriding the puzzle workspace
pub const WORKSPACE_ENV: &str = "AOC_WORKSPACE";

/// Environment variable overriding the puzzle server address
pub const SERVER_ENV: &str = "AOC_SERVER";

/// Folder created under the OS cache directory
const CACHE_DIR_NAME: &str = "aoc-cache";

/// Default puzzle server
pub const DEFAULT_SERVER: &str = "https://adventofcode.com";

/// Process-wide settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the result cache (`<root>/puzzles`, `<root>/config`)
    pub cache_root: PathBuf,

    /// Directory holding `{year}/input/day{d}/` trees
    pub workspace: PathBuf,

    /// Upper bound on simultaneous runs during check (None = unbounded)
    pub jobs: Option<usize>,

    /// Base address of the puzzle server
    pub server: String,
}

impl Config {
    /// Create a config with explicit roots
    pub fn new(cache_root: impl Into<PathBuf>, workspace: impl Into<PathBuf>) -> Self {
        Self {
            cache_root: cache_root.into(),
            workspace: workspace.into(),
            jobs: None,
            server: DEFAULT_SERVER.to_string(),
        }
    }

    /// Resolve the config from the environment
    ///
    /// `workspace` wins over `AOC_WORKSPACE`, which wins over the current
    /// directory.
    pub fn from_env(workspace: Option<&Path>) -> AocResult<Self> {
        let cache_root = Self::resolve_cache_root(std::env::var(CACHE_ENV).ok());

        let workspace = match workspace {
            Some(path) => path.to_path_buf(),
            None => match std::env::var(WORKSPACE_ENV) {
                Ok(path) if !path.is_empty() => PathBuf::from(path),
                _ => std::env::current_dir()
                    .map_err(|e| AocError::io("getting current directory", e))?,
            },
        };

        let server = match std::env::var(SERVER_ENV) {
            Ok(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
            _ => DEFAULT_SERVER.to_string(),
        };

        debug!("Cache root: {}", cache_root.display());
        debug!("Workspace: {}", workspace.display());

        Ok(Self {
            cache_root,
            workspace,
            jobs: None,
            server,
        })
    }

    /// Cap simultaneous check runs
    pub fn with_jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs.filter(|&n| n > 0);
        self
    }

    /// Default cache root under the OS user cache directory
    pub fn default_cache_root() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CACHE_DIR_NAME)
    }

    fn resolve_cache_root(override_value: Option<String>) -> PathBuf {
        match override_value {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => Self::default_cache_root(),
        }
    }
}
