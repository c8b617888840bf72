//! Per-entry write guard
//!
//! Serializes read-decide-write sequences on one entry's `lock`/`res`/`dur`
//! files, both across processes (check runs entries in child processes) and
//! across threads of one process.

use crate::error::{AocError, AocResult};
use fs2::FileExt as _;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock};
use tracing::debug;

/// Exclusive advisory lock on one cache entry, released on drop
#[derive(Debug)]
pub struct EntryGuard {
    file: File,
    path: PathBuf,
    // flock only excludes other processes; the mutex excludes other threads.
    _thread_guard: MutexGuard<'static, ()>,
}

impl EntryGuard {
    /// Block until the guard file at `path` is exclusively held
    pub fn acquire(path: &Path) -> AocResult<Self> {
        let mutex = process_lock_for_path(path);
        let thread_guard = mutex
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AocError::io(format!("creating cache dir {}", parent.display()), e)
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| AocError::io(format!("opening guard {}", path.display()), e))?;
        file.lock_exclusive()
            .map_err(|e| AocError::io(format!("locking guard {}", path.display()), e))?;

        debug!("Acquired entry guard {}", path.display());
        Ok(Self {
            file,
            path: path.to_path_buf(),
            _thread_guard: thread_guard,
        })
    }
}

impl Drop for EntryGuard {
    fn drop(&mut self) {
        let _ = self.file.unlock();
        debug!("Released entry guard {}", self.path.display());
    }
}

fn process_lock_for_path(path: &Path) -> &'static Mutex<()> {
    static PROCESS_LOCKS: OnceLock<Mutex<HashMap<PathBuf, &'static Mutex<()>>>> = OnceLock::new();
    let locks = PROCESS_LOCKS.get_or_init(|| Mutex::new(HashMap::new()));

    let mut map = locks
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(existing) = map.get(path) {
        return existing;
    }

    let mutex: &'static Mutex<()> = Box::leak(Box::new(Mutex::new(())));
    map.insert(path.to_path_buf(), mutex);
    mutex
}
