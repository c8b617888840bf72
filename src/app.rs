//! Programmatic surface used by the CLI
//!
//! Every operation takes plain puzzle identifiers. Cache keys, entry files
//! and runner manifests stay internal.

use crate::cache::entry::{LAST_RUN, RES, SESSION};
use crate::cache::{CacheKey, CacheStore, PuzzleId, PuzzleRecord};
use crate::check::{CheckOrchestrator, CheckSummary, Surface};
use crate::config::Config;
use crate::error::{AocError, AocResult};
use crate::executor::{ProcessExecutor, PuzzleExecutor, RunStatus};
use crate::lock::LockController;
use crate::puzzle::Puzzle;
use crate::registry::Registry;
use crate::remote::RemoteClient;
use crate::runner::{parse_regression_line, RunnerGenerator};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Config blob domain for per-user state
const USER: &str = "user";
/// Only runs against this input may be submitted
const SUBMITTABLE_INPUT: &str = "input";

/// Runs, verifies and manages cached puzzle results
pub struct Aoc {
    config: Config,
    store: CacheStore,
    registry: Registry,
    executor: Arc<dyn PuzzleExecutor>,
}

impl Aoc {
    /// Facade running puzzles through this executable
    pub fn new(config: Config, registry: Registry) -> AocResult<Self> {
        let executor = ProcessExecutor::current()?;
        Ok(Self::with_executor(config, registry, Arc::new(executor)))
    }

    pub fn with_executor(
        config: Config,
        registry: Registry,
        executor: Arc<dyn PuzzleExecutor>,
    ) -> Self {
        let store = CacheStore::new(&config.cache_root);
        if registry.is_empty() {
            warn!("No solutions are registered in this build");
        } else {
            debug!("{} solutions registered", registry.len());
        }
        Self {
            config,
            store,
            registry,
            executor,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate a run request without touching the cache
    pub fn prepare(&self, year: u16, day: u8, part: u8, input: &str) -> AocResult<Puzzle> {
        let puzzle = Puzzle::new(year, day, part, input)?;

        if !self.registry.contains(&puzzle) {
            return Err(AocError::SolutionNotFound(puzzle.label()));
        }
        let input_path = puzzle.input_path(&self.config.workspace);
        if !input_path.is_file() {
            return Err(AocError::InputNotFound {
                puzzle: puzzle.label(),
                input: input_path,
            });
        }
        Ok(puzzle)
    }

    /// Run one puzzle, verifying against its lock
    pub async fn run(&self, year: u16, day: u8, part: u8, input: &str) -> AocResult<()> {
        let puzzle = self.prepare(year, day, part, input)?;
        self.run_prepared(&puzzle).await
    }

    /// Run a puzzle returned by [`Aoc::prepare`]
    pub async fn run_prepared(&self, puzzle: &Puzzle) -> AocResult<()> {
        let runner = RunnerGenerator::new(&self.store, &self.config.workspace).ensure(puzzle)?;
        info!("Running {}", puzzle);

        let report = self.executor.run_interactive(&runner).await?;
        match report.status {
            RunStatus::Passed => {
                self.record_last_run(puzzle)?;
                Ok(())
            }
            RunStatus::Failed { detail } => {
                self.record_last_run(puzzle)?;
                let line = format!("Error: {}", detail);
                let (got, want) = parse_regression_line(&line).unwrap_or((detail, String::new()));
                Err(AocError::Regression { got, want })
            }
            RunStatus::Errored { reason } => Err(AocError::RunnerExit { status: reason }),
        }
    }

    /// Stored record, or `None` if the puzzle never ran
    pub fn status(
        &self,
        year: u16,
        day: u8,
        part: u8,
        input: &str,
    ) -> AocResult<Option<PuzzleRecord>> {
        let puzzle = Puzzle::new(year, day, part, input)?;
        LockController::new(&self.store).status(&puzzle.key())
    }

    /// Lock the stored result; `None` if the puzzle never ran
    pub fn lock(&self, year: u16, day: u8, part: u8, input: &str) -> AocResult<Option<PuzzleRecord>> {
        let puzzle = Puzzle::new(year, day, part, input)?;
        LockController::new(&self.store).lock(&puzzle.key())
    }

    /// Unlock the stored result; `None` if the puzzle never ran
    pub fn unlock(
        &self,
        year: u16,
        day: u8,
        part: u8,
        input: &str,
    ) -> AocResult<Option<PuzzleRecord>> {
        let puzzle = Puzzle::new(year, day, part, input)?;
        LockController::new(&self.store).unlock(&puzzle.key())
    }

    /// Re-run every locked puzzle
    pub async fn check(&self, surface: &mut dyn Surface) -> AocResult<CheckSummary> {
        CheckOrchestrator::new(self.store.clone(), Arc::clone(&self.executor))
            .with_jobs(self.config.jobs)
            .run(surface)
            .await
    }

    /// Remove every cached result, lock and setting
    pub fn clear_cache(&self) -> AocResult<()> {
        self.store.clear()
    }

    /// Puzzle of the most recent completed run
    pub fn last_run(&self) -> AocResult<Option<Puzzle>> {
        let key = CacheKey::config(USER);
        if self.store.contains(&key, LAST_RUN).is_none() {
            return Ok(None);
        }
        let id = PuzzleId::parse(self.store.read_to_string(&key, LAST_RUN)?.trim())?;
        Puzzle::from_id(&id).map(Some)
    }

    /// Last run puzzle and its stored result, for submission
    pub fn last_result(&self) -> AocResult<(Puzzle, String)> {
        let puzzle = self
            .last_run()?
            .ok_or_else(|| AocError::User("No puzzle has been run yet".to_string()))?;
        if puzzle.input_basename() != SUBMITTABLE_INPUT {
            return Err(AocError::User(format!(
                "Last run used {}; only runs with input.txt can be submitted",
                puzzle.input
            )));
        }

        let key = puzzle.key();
        if self.store.contains(&key, RES).is_none() {
            return Err(AocError::CacheEntryIncomplete(key.to_string()));
        }
        let res = self.store.read_to_string(&key, RES)?.trim().to_string();
        if res.is_empty() {
            return Err(AocError::User(format!("No result recorded for {}", puzzle.label())));
        }
        Ok((puzzle, res))
    }

    /// Lock a puzzle whose answer the server accepted
    pub fn mark_correct(&self, puzzle: &Puzzle) -> AocResult<()> {
        LockController::new(&self.store)
            .lock(&puzzle.key())?
            .map(|_| ())
            .ok_or_else(|| AocError::CacheEntryIncomplete(puzzle.key().to_string()))
    }

    /// Stored session token
    pub fn session(&self) -> AocResult<Option<String>> {
        let key = CacheKey::config(USER);
        if self.store.contains(&key, SESSION).is_none() {
            return Ok(None);
        }
        let token = self.store.read_to_string(&key, SESSION)?;
        let token = token.trim();
        Ok((!token.is_empty()).then(|| token.to_string()))
    }

    pub fn save_session(&self, token: &str) -> AocResult<()> {
        self.store
            .store_bytes(&CacheKey::config(USER), SESSION, token.trim().as_bytes())?;
        debug!("Stored session token");
        Ok(())
    }

    /// Client for an explicit token
    pub fn client_for(&self, session: &str) -> RemoteClient {
        RemoteClient::new(self.config.server.clone(), session)
    }

    /// Client for the stored session
    pub fn client(&self) -> AocResult<RemoteClient> {
        let session = self.session()?.ok_or(AocError::NotLoggedIn)?;
        Ok(self.client_for(&session))
    }

    /// Path a downloaded input file is written to
    pub fn input_file(&self, year: u16, day: u8, name: &str) -> AocResult<PathBuf> {
        Ok(Puzzle::new(year, day, 1, name)?.input_path(&self.config.workspace))
    }

    /// Write a downloaded input unless the file already exists
    ///
    /// Returns the path written, or `None` if it was kept.
    pub fn save_input(
        &self,
        year: u16,
        day: u8,
        name: &str,
        contents: &str,
    ) -> AocResult<Option<PathBuf>> {
        let path = self.input_file(year, day, name)?;
        if path.exists() {
            debug!("Keeping existing {}", path.display());
            return Ok(None);
        }
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|e| AocError::io(format!("creating {}", dir.display()), e))?;
        }
        std::fs::write(&path, contents)
            .map_err(|e| AocError::io(format!("writing {}", path.display()), e))?;
        Ok(Some(path))
    }

    fn record_last_run(&self, puzzle: &Puzzle) -> AocResult<()> {
        self.store
            .store_bytes(&CacheKey::config(USER), LAST_RUN, puzzle.pointer().as_bytes())?;
        Ok(())
    }
}
