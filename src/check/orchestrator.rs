//! Concurrent re-verification of locked puzzles

use super::board::{Board, CheckLine, LineState};
use super::surface::Surface;
use crate::cache::entry::{parse_lock, LOCK, RUNNER};
use crate::cache::CacheStore;
use crate::error::{AocError, AocResult};
use crate::executor::{PuzzleExecutor, RunReport};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Semaphore};
use tracing::{debug, info, warn};

/// Spinner redraw interval
pub const TICK: Duration = Duration::from_millis(50);

/// A locked entry selected for checking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled {
    pub label: String,
    pub runner: PathBuf,
}

enum Event {
    Started(usize),
    Finished(usize, RunReport),
}

/// Final state of every checked entry, in schedule order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    pub lines: Vec<CheckLine>,
}

impl CheckSummary {
    pub fn total(&self) -> usize {
        self.lines.len()
    }

    pub fn passed(&self) -> usize {
        self.count(|state| matches!(state, LineState::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(|state| matches!(state, LineState::Failed(_)))
    }

    pub fn errored(&self) -> usize {
        self.count(|state| matches!(state, LineState::Errored(_)))
    }

    /// No entry failed or errored
    pub fn is_success(&self) -> bool {
        self.passed() == self.total()
    }

    fn count(&self, pred: impl Fn(&LineState) -> bool) -> usize {
        self.lines.iter().filter(|line| pred(&line.state)).count()
    }
}

/// Runs every locked entry through an executor and renders progress
pub struct CheckOrchestrator {
    store: CacheStore,
    executor: Arc<dyn PuzzleExecutor>,
    jobs: Option<usize>,
    tick: Duration,
}

impl CheckOrchestrator {
    pub fn new(store: CacheStore, executor: Arc<dyn PuzzleExecutor>) -> Self {
        Self {
            store,
            executor,
            jobs: None,
            tick: TICK,
        }
    }

    /// Limit simultaneous runs; `None` runs every entry at once
    pub fn with_jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs.filter(|n| *n > 0);
        self
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Locked entries in (year, day, part) order
    ///
    /// Failing to read an entry's lock flag aborts the whole check.
    pub fn schedule(&self) -> AocResult<Vec<Scheduled>> {
        let mut scheduled = Vec::new();
        for entry in self.store.all_puzzle_entries()? {
            let key = entry.key();
            let lock = match self.store.read_to_string(&key, LOCK) {
                Ok(text) => text,
                Err(AocError::Io { ref source, .. }) if source.kind() == ErrorKind::NotFound => {
                    debug!("Skipping {}: no lock file", key);
                    continue;
                }
                Err(e) => return Err(e),
            };
            if !parse_lock(&lock) {
                continue;
            }
            scheduled.push(Scheduled {
                label: entry.id.to_string(),
                runner: self.store.path_for(&key, RUNNER),
            });
        }
        Ok(scheduled)
    }

    /// Check every locked entry, drawing the board on `surface`
    pub async fn run(&self, surface: &mut dyn Surface) -> AocResult<CheckSummary> {
        let scheduled = self.schedule()?;
        info!("Checking {} locked puzzle(s)", scheduled.len());

        let mut board = Board::new(scheduled.iter().map(|s| s.label.clone()));
        if board.is_empty() {
            surface.finish(&board)?;
            return Ok(CheckSummary { lines: Vec::new() });
        }

        let (tx, mut rx) = mpsc::unbounded_channel();
        let limiter = self.jobs.map(|n| Arc::new(Semaphore::new(n)));

        for (index, entry) in scheduled.into_iter().enumerate() {
            let tx = tx.clone();
            let executor = Arc::clone(&self.executor);
            let limiter = limiter.clone();

            tokio::spawn(async move {
                let _permit = match limiter {
                    Some(limiter) => limiter.acquire_owned().await.ok(),
                    None => None,
                };
                let _ = tx.send(Event::Started(index));
                let report = executor.run_captured(&entry.runner).await;
                let _ = tx.send(Event::Finished(index, report));
            });
        }
        drop(tx);

        let mut ticker = tokio::time::interval(self.tick);
        surface.draw(&board)?;

        while !board.is_complete() {
            tokio::select! {
                _ = ticker.tick() => board.tick(),
                event = rx.recv() => match event {
                    Some(Event::Started(index)) => board.start(index),
                    Some(Event::Finished(index, report)) => {
                        debug!("Entry {} {}", index, report.status);
                        board.settle(index, report.status.into());
                    }
                    None => {
                        warn!("Check tasks ended without reporting every entry");
                        board.abandon("runner task ended without a result");
                    }
                },
            }
            surface.draw(&board)?;
        }

        surface.finish(&board)?;
        Ok(CheckSummary {
            lines: board.into_lines(),
        })
    }
}
