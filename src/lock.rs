//! Lock state of cached puzzle entries
//!
//! Locking marks an entry's current result as verified; later runs must
//! reproduce it. None of these operations create entries: asking about a
//! puzzle that never ran yields `None`.

use crate::cache::entry::{format_lock, DUR, LOCK, RES};
use crate::cache::{CacheKey, CacheStore, PuzzleRecord};
use crate::error::{AocError, AocResult};
use std::io::ErrorKind;
use tracing::info;

/// Reads and flips the lock flag of puzzle entries
pub struct LockController<'a> {
    store: &'a CacheStore,
}

impl<'a> LockController<'a> {
    pub fn new(store: &'a CacheStore) -> Self {
        Self { store }
    }

    /// Current record, or `None` if the puzzle never ran
    pub fn status(&self, key: &CacheKey) -> AocResult<Option<PuzzleRecord>> {
        if self.store.contains_key(key).is_none() {
            return Ok(None);
        }
        self.read(key).map(Some)
    }

    /// Mark the stored result as verified
    pub fn lock(&self, key: &CacheKey) -> AocResult<Option<PuzzleRecord>> {
        self.set(key, true)
    }

    /// Let the next run overwrite the stored result
    pub fn unlock(&self, key: &CacheKey) -> AocResult<Option<PuzzleRecord>> {
        self.set(key, false)
    }

    fn set(&self, key: &CacheKey, locked: bool) -> AocResult<Option<PuzzleRecord>> {
        if self.store.contains_key(key).is_none() {
            return Ok(None);
        }

        let _guard = self.store.guard(key)?;
        let mut record = self.read(key)?;
        if record.locked != locked {
            self.store.write(key, LOCK, format_lock(locked))?;
            record.locked = locked;
            info!("{} {}", if locked { "Locked" } else { "Unlocked" }, key);
        }
        Ok(Some(record))
    }

    fn read(&self, key: &CacheKey) -> AocResult<PuzzleRecord> {
        let lock = self.read_file(key, LOCK)?;
        let res = self.read_file(key, RES)?;
        // A missing or garbled dur file only means no duration on record.
        let dur = self.read_file(key, DUR).unwrap_or_default();
        Ok(PuzzleRecord::from_files(&lock, &res, &dur))
    }

    fn read_file(&self, key: &CacheKey, file: &str) -> AocResult<String> {
        self.store.read_to_string(key, file).map_err(|e| match e {
            AocError::Io { ref source, .. } if source.kind() == ErrorKind::NotFound => {
                AocError::CacheEntryIncomplete(key.to_string())
            }
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::entry::format_duration;
    use std::time::Duration;
    use tempfile::TempDir;

    fn seeded(lock: &str, res: &str, dur: &str) -> (CacheStore, CacheKey, TempDir) {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path().join("cache"));
        let key = CacheKey::puzzle(2024, 1, 1, "input.txt");
        store.store_bytes(&key, LOCK, lock.as_bytes()).unwrap();
        store.store_bytes(&key, RES, res.as_bytes()).unwrap();
        store.store_bytes(&key, DUR, dur.as_bytes()).unwrap();
        (store, key, temp)
    }

    #[test]
    fn absent_entry_is_none_and_not_created() {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path().join("cache"));
        let key = CacheKey::puzzle(2024, 1, 1, "input.txt");
        let locks = LockController::new(&store);

        assert_eq!(locks.status(&key).unwrap(), None);
        assert_eq!(locks.lock(&key).unwrap(), None);
        assert_eq!(locks.unlock(&key).unwrap(), None);
        assert!(store.contains_key(&key).is_none());
    }

    #[test]
    fn lock_then_unlock() {
        let dur = format_duration(Duration::from_millis(3));
        let (store, key, _temp) = seeded("false", "11", &dur);
        let locks = LockController::new(&store);

        let record = locks.lock(&key).unwrap().unwrap();
        assert!(record.locked);
        assert_eq!(record.res, "11");
        assert_eq!(record.dur, Some(Duration::from_millis(3)));
        assert_eq!(store.read_to_string(&key, LOCK).unwrap(), "true");

        let record = locks.unlock(&key).unwrap().unwrap();
        assert!(!record.locked);
        assert_eq!(store.read_to_string(&key, LOCK).unwrap(), "false");
        // res and dur are never touched
        assert_eq!(store.read_to_string(&key, RES).unwrap(), "11");
        assert_eq!(store.read_to_string(&key, DUR).unwrap(), dur);
    }

    #[test]
    fn lock_is_idempotent() {
        let (store, key, _temp) = seeded("true", "11", "5ns");
        let locks = LockController::new(&store);
        assert!(locks.lock(&key).unwrap().unwrap().locked);
        assert!(locks.lock(&key).unwrap().unwrap().locked);
    }

    #[test]
    fn status_reads_record() {
        let (store, key, _temp) = seeded("true", "31\n", "garbage");
        let record = LockController::new(&store).status(&key).unwrap().unwrap();
        assert!(record.locked);
        assert_eq!(record.res, "31");
        assert_eq!(record.dur, None);
    }

    #[test]
    fn missing_lock_file_is_incomplete() {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path().join("cache"));
        let key = CacheKey::puzzle(2024, 1, 1, "input.txt");
        store.store_bytes(&key, RES, b"11").unwrap();

        let err = LockController::new(&store).status(&key).unwrap_err();
        assert!(matches!(err, AocError::CacheEntryIncomplete(_)));
    }
}
