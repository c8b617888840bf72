//! Runner generation
//!
//! The first run of a puzzle identity scaffolds its cache entry: seed
//! `lock`, `res` and `dur` files plus the runner manifest. The manifest is
//! written last, so an entry is only considered generated once all of its
//! files exist. Existing runners are never rewritten, and seeding never
//! overwrites an entry file that is already present.

use super::manifest::RunnerManifest;
use crate::cache::entry::{format_duration, format_lock, DUR, GUARD, LOCK, RES, RUNNER};
use crate::cache::{CacheStore, DURATION_SENTINEL};
use crate::error::{AocError, AocResult};
use crate::puzzle::Puzzle;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Produces runner manifests on cache miss
pub struct RunnerGenerator<'a> {
    store: &'a CacheStore,
    workspace: &'a Path,
}

impl<'a> RunnerGenerator<'a> {
    pub fn new(store: &'a CacheStore, workspace: &'a Path) -> Self {
        Self { store, workspace }
    }

    /// Path of the puzzle's runner, generating the entry if missing
    pub fn ensure(&self, puzzle: &Puzzle) -> AocResult<PathBuf> {
        let key = puzzle.key();
        if let Some(path) = self.store.contains(&key, RUNNER) {
            debug!("Runner cache hit for {}", key);
            return check_input(puzzle, path);
        }

        let _guard = self.store.guard(&key)?;
        // Another process may have finished generating while we waited.
        if let Some(path) = self.store.contains(&key, RUNNER) {
            return check_input(puzzle, path);
        }

        info!("Generating runner for {}", puzzle);
        let manifest = self.manifest(puzzle)?;

        let sentinel = format_duration(DURATION_SENTINEL);
        let seeds: [(&str, &[u8]); 3] = [
            (LOCK, format_lock(false).as_bytes()),
            (RES, b""),
            (DUR, sentinel.as_bytes()),
        ];
        for (file, contents) in seeds {
            if self.store.contains(&key, file).is_some() {
                debug!("Keeping existing {} of {}", file, key);
                continue;
            }
            self.store.store_bytes(&key, file, contents)?;
        }
        self.store
            .store_bytes(&key, RUNNER, manifest.render()?.as_bytes())
    }

    fn manifest(&self, puzzle: &Puzzle) -> AocResult<RunnerManifest> {
        let key = puzzle.key();
        let workspace = std::path::absolute(self.workspace).map_err(|e| {
            AocError::io(format!("resolving workspace {}", self.workspace.display()), e)
        })?;
        let store_root = std::path::absolute(self.store.root()).map_err(|e| {
            AocError::io(format!("resolving cache root {}", self.store.root().display()), e)
        })?;
        let entry = CacheStore::new(store_root).entry_dir(&key);

        Ok(RunnerManifest {
            puzzle: puzzle.label(),
            entry: puzzle.entry_point(),
            input: puzzle.input_path(&workspace),
            lock: entry.join(LOCK),
            res: entry.join(RES),
            dur: entry.join(DUR),
            guard: entry.join(GUARD),
            generated_at: Utc::now(),
        })
    }
}

/// Reject a cached runner that reads a different input file
///
/// Only a trailing `.txt` is dropped from cache ids, so `a` and `a.txt`
/// share an entry.
fn check_input(puzzle: &Puzzle, runner: PathBuf) -> AocResult<PathBuf> {
    let manifest = RunnerManifest::load(&runner)?;
    let cached = manifest
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    if cached != puzzle.input {
        return Err(AocError::InvalidPuzzle(format!(
            "input {} shares cache entry {} with {}",
            puzzle.input,
            puzzle.key(),
            cached
        )));
    }
    Ok(runner)
}
