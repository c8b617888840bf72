//! File-backed cache store
//!
//! Maps `(namespace, id)` keys to directories of small named blobs under one
//! root. Nothing else in the crate knows the on-disk layout.

use super::entry::GUARD;
use super::guard::EntryGuard;
use super::key::{CacheKey, Namespace, PuzzleId};
use crate::error::{AocError, AocResult};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Key-addressed store rooted at one directory
#[derive(Debug, Clone)]
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    /// Create a store rooted at `root`; nothing is created on disk yet
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of one entry
    pub fn entry_dir(&self, key: &CacheKey) -> PathBuf {
        self.root.join(key.namespace().dir_name()).join(key.id())
    }

    /// Path of a file inside an entry; never touches disk
    pub fn path_for(&self, key: &CacheKey, file: &str) -> PathBuf {
        self.entry_dir(key).join(file)
    }

    /// Entry directory if it exists
    ///
    /// Any stat failure, permission errors included, counts as absent.
    pub fn contains_key(&self, key: &CacheKey) -> Option<PathBuf> {
        let path = self.entry_dir(key);
        fs::metadata(&path).ok().map(|_| path)
    }

    /// Entry file if it exists
    pub fn contains(&self, key: &CacheKey, file: &str) -> Option<PathBuf> {
        let path = self.path_for(key, file);
        fs::metadata(&path).ok().map(|_| path)
    }

    /// Move a materialized file into the entry, replacing any previous one
    pub fn store(&self, key: &CacheKey, file: &str, source: &Path) -> AocResult<PathBuf> {
        fs::metadata(source).map_err(|e| {
            AocError::io(format!("checking source {}", source.display()), e)
        })?;

        let dir = self.entry_dir(key);
        fs::create_dir_all(&dir)
            .map_err(|e| AocError::io(format!("creating cache dir {}", dir.display()), e))?;

        let dest = dir.join(file);
        if let Err(rename_err) = fs::rename(source, &dest) {
            // rename cannot cross filesystems; fall back to copy + remove
            if fs::copy(source, &dest).is_err() {
                return Err(AocError::io(
                    format!("moving {} to {}", source.display(), dest.display()),
                    rename_err,
                ));
            }
            fs::remove_file(source).map_err(|e| {
                AocError::io(format!("removing {}", source.display()), e)
            })?;
        }

        debug!("Stored {}", dest.display());
        Ok(dest)
    }

    /// Materialize `contents` in a temp file under the root, then `store` it
    pub fn store_bytes(&self, key: &CacheKey, file: &str, contents: &[u8]) -> AocResult<PathBuf> {
        fs::create_dir_all(&self.root).map_err(|e| {
            AocError::io(format!("creating cache root {}", self.root.display()), e)
        })?;

        let mut temp = tempfile::Builder::new()
            .prefix(".tmp-")
            .tempfile_in(&self.root)
            .map_err(|e| AocError::io("creating temp file", e))?;
        temp.write_all(contents)
            .map_err(|e| AocError::io(format!("writing {}", temp.path().display()), e))?;
        let (_, temp_path) = temp
            .keep()
            .map_err(|e| AocError::io("persisting temp file", e.error))?;

        self.store(key, file, &temp_path)
    }

    /// Read an entry file as text
    pub fn read_to_string(&self, key: &CacheKey, file: &str) -> AocResult<String> {
        let path = self.path_for(key, file);
        fs::read_to_string(&path)
            .map_err(|e| AocError::io(format!("reading {}", path.display()), e))
    }

    /// Overwrite a file of an existing entry in place
    pub fn write(&self, key: &CacheKey, file: &str, contents: &str) -> AocResult<()> {
        let path = self.path_for(key, file);
        fs::write(&path, contents)
            .map_err(|e| AocError::io(format!("writing {}", path.display()), e))
    }

    /// Hold the entry's advisory write guard
    pub fn guard(&self, key: &CacheKey) -> AocResult<EntryGuard> {
        EntryGuard::acquire(&self.path_for(key, GUARD))
    }

    /// Remove the whole cache root; an absent root is not an error
    pub fn clear(&self) -> AocResult<()> {
        match fs::remove_dir_all(&self.root) {
            Ok(()) => {
                info!("Cleared cache at {}", self.root.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AocError::io(
                format!("removing cache {}", self.root.display()),
                e,
            )),
        }
    }

    /// Every puzzle entry ordered by (year, day, part)
    ///
    /// Directory names that do not parse as puzzle ids are skipped.
    pub fn all_puzzle_entries(&self) -> AocResult<PuzzleEntries> {
        let dir = self.root.join(Namespace::Puzzles.dir_name());
        let listing = match fs::read_dir(&dir) {
            Ok(listing) => listing,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(PuzzleEntries {
                    inner: Vec::new().into_iter(),
                })
            }
            Err(e) => {
                return Err(AocError::io(format!("listing {}", dir.display()), e));
            }
        };

        let mut entries = Vec::new();
        for item in listing {
            let item = item.map_err(|e| AocError::io(format!("listing {}", dir.display()), e))?;
            let name = item.file_name().to_string_lossy().into_owned();
            if !item.path().is_dir() {
                continue;
            }
            match PuzzleId::parse(&name) {
                Ok(id) => entries.push(PuzzleEntry {
                    id,
                    path: item.path(),
                }),
                Err(e) => debug!("Skipping cache entry {}: {}", name, e),
            }
        }

        entries.sort_by(|a, b| a.id.schedule_order(&b.id));
        Ok(PuzzleEntries {
            inner: entries.into_iter(),
        })
    }
}

/// One enumerated puzzle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleEntry {
    pub id: PuzzleId,
    pub path: PathBuf,
}

impl PuzzleEntry {
    pub fn key(&self) -> CacheKey {
        self.id.key()
    }
}

/// Ordered, single-pass sequence of puzzle entries
#[derive(Debug)]
pub struct PuzzleEntries {
    inner: std::vec::IntoIter<PuzzleEntry>,
}

impl Iterator for PuzzleEntries {
    type Item = PuzzleEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (CacheStore, TempDir) {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path().join("cache"));
        (store, temp)
    }

    #[test]
    fn path_for_layout() {
        let store = CacheStore::new("/c");
        let key = CacheKey::puzzle(2024, 1, 1, "input.txt");
        assert_eq!(
            store.path_for(&key, "res"),
            PathBuf::from("/c/puzzles/2024-day1-part1-input/res")
        );
        assert_eq!(
            store.path_for(&CacheKey::config("user"), "session"),
            PathBuf::from("/c/config/user/session")
        );
    }

    #[test]
    fn store_then_contains_roundtrip() {
        let (store, temp) = test_store();
        let key = CacheKey::puzzle(2024, 3, 2, "test.txt");
        let src = temp.path().join("src");
        fs::write(&src, b"\x00bytes\nand more").unwrap();

        let stored = store.store(&key, "blob", &src).unwrap();
        let found = store.contains(&key, "blob").unwrap();

        assert_eq!(stored, found);
        assert_eq!(fs::read(&found).unwrap(), b"\x00bytes\nand more");
        assert!(!src.exists());
        assert!(store.contains_key(&key).is_some());
    }

    #[test]
    fn store_overwrites_existing() {
        let (store, temp) = test_store();
        let key = CacheKey::config("user");
        for body in ["first", "second"] {
            let src = temp.path().join("src");
            fs::write(&src, body).unwrap();
            store.store(&key, "session", &src).unwrap();
        }
        assert_eq!(store.read_to_string(&key, "session").unwrap(), "second");
    }

    #[test]
    fn store_missing_source_fails() {
        let (store, temp) = test_store();
        let key = CacheKey::config("user");
        let err = store
            .store(&key, "session", &temp.path().join("nope"))
            .unwrap_err();
        assert!(matches!(err, AocError::Io { .. }));
        assert!(store.contains_key(&key).is_none());
    }

    #[test]
    fn store_bytes_leaves_no_temp_files() {
        let (store, _temp) = test_store();
        let key = CacheKey::config("user");
        store.store_bytes(&key, "last", b"2024-day1-part1-input").unwrap();

        let leftovers: Vec<_> = fs::read_dir(store.root())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with(".tmp-"))
            .collect();
        assert!(leftovers.is_empty());
        assert_eq!(
            store.read_to_string(&key, "last").unwrap(),
            "2024-day1-part1-input"
        );
    }

    #[test]
    fn contains_absent() {
        let (store, _temp) = test_store();
        let key = CacheKey::puzzle(2024, 1, 1, "input.txt");
        assert!(store.contains_key(&key).is_none());
        assert!(store.contains(&key, "res").is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let (store, _temp) = test_store();
        store.clear().unwrap();
        store
            .store_bytes(&CacheKey::config("user"), "session", b"token")
            .unwrap();
        store.clear().unwrap();
        assert!(!store.root().exists());
        store.clear().unwrap();
        assert!(!store.root().exists());
    }

    #[test]
    fn enumeration_is_ordered() {
        let (store, _temp) = test_store();
        for id in ["2024-day2-part1-x", "2024-day1-part1-x", "2023-day5-part2-y"] {
            fs::create_dir_all(store.root().join("puzzles").join(id)).unwrap();
        }
        // Stray files and unparsable names are not entries.
        fs::write(store.root().join("puzzles").join("notes.txt"), "").unwrap();
        fs::create_dir_all(store.root().join("puzzles").join("scratch")).unwrap();

        let ids: Vec<String> = store
            .all_puzzle_entries()
            .unwrap()
            .map(|e| e.key().id().to_string())
            .collect();

        assert_eq!(
            ids,
            vec!["2023-day5-part2-y", "2024-day1-part1-x", "2024-day2-part1-x"]
        );
    }

    #[test]
    fn enumeration_orders_numerically() {
        let (store, _temp) = test_store();
        for id in ["2024-day10-part1-input", "2024-day9-part2-input", "2024-day9-part1-input"] {
            fs::create_dir_all(store.root().join("puzzles").join(id)).unwrap();
        }
        let ids: Vec<String> = store
            .all_puzzle_entries()
            .unwrap()
            .map(|e| e.key().id().to_string())
            .collect();
        assert_eq!(
            ids,
            vec![
                "2024-day9-part1-input",
                "2024-day9-part2-input",
                "2024-day10-part1-input"
            ]
        );
    }

    #[test]
    fn enumeration_of_missing_root_is_empty() {
        let (store, _temp) = test_store();
        assert_eq!(store.all_puzzle_entries().unwrap().count(), 0);
    }
}
