//! Persistent key-value storage
//!
//! A flat JSON object of string keys to string values, kept in memory and
//! written through to a file on every change. Plays the role browser local
//! storage plays for a web front end.

use crate::ClientResult;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Key-value storage, cheap to clone
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    path: Option<PathBuf>,
    entries: Arc<RwLock<BTreeMap<String, String>>>,
}

impl LocalStorage {
    /// Storage that lives only as long as the process
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open (or create on first write) a storage file
    ///
    /// An unreadable or corrupt file is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> ClientResult<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let json = fs::read_to_string(&path)?;
            serde_json::from_str(&json).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Corrupt storage file, starting empty");
                BTreeMap::new()
            })
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path: Some(path),
            entries: Arc::new(RwLock::new(entries)),
        })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.read().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    pub fn set(&self, key: &str, value: impl Into<String>) -> ClientResult<()> {
        let value = value.into();
        self.update(|entries| entries.insert(key.to_string(), value.clone()) != Some(value))
    }

    pub fn remove(&self, key: &str) -> ClientResult<()> {
        self.update(|entries| entries.remove(key).is_some())
    }

    /// Remove several keys with a single write
    pub fn remove_all<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> ClientResult<()> {
        self.update(|entries| {
            let before = entries.len();
            for key in keys {
                entries.remove(key);
            }
            entries.len() != before
        })
    }

    pub fn clear(&self) -> ClientResult<()> {
        self.update(|entries| {
            let changed = !entries.is_empty();
            entries.clear();
            changed
        })
    }

    pub fn keys(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Apply `change` to a copy of the entries, write the copy, then swap it
    /// in. On a failed write the entries are left untouched. `change`
    /// returns whether anything changed.
    fn update(&self, change: impl FnOnce(&mut BTreeMap<String, String>) -> bool) -> ClientResult<()> {
        let mut entries = self.write();
        let mut next = entries.clone();
        if !change(&mut next) {
            return Ok(());
        }
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> ClientResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(path, json)?;
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, String>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, String>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory() {
        let storage = LocalStorage::in_memory();
        storage.set("a", "1").unwrap();
        assert_eq!(storage.get("a").as_deref(), Some("1"));
        assert!(storage.contains("a"));
        storage.remove("a").unwrap();
        assert!(storage.get("a").is_none());
        assert!(storage.path().is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let storage = LocalStorage::in_memory();
        let other = storage.clone();
        storage.set("k", "v").unwrap();
        assert_eq!(other.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_remove_all_and_clear() {
        let storage = LocalStorage::in_memory();
        storage.set("a", "1").unwrap();
        storage.set("b", "2").unwrap();
        storage.set("c", "3").unwrap();
        storage.remove_all(["a", "b", "missing"]).unwrap();
        assert_eq!(storage.keys(), vec!["c".to_string()]);
        storage.clear().unwrap();
        assert!(storage.keys().is_empty());
    }

    #[test]
    fn test_failed_write_leaves_entries_unchanged() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        let storage = LocalStorage::open(&path).unwrap();
        storage.set("customerToken", "t-1").unwrap();

        // a directory where the file should be makes every write fail
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        assert!(storage.set("customerToken", "t-2").is_err());
        assert!(storage.remove("customerToken").is_err());
        assert!(storage.clear().is_err());
        assert_eq!(storage.get("customerToken").as_deref(), Some("t-1"));
        assert_eq!(storage.keys(), vec!["customerToken".to_string()]);
    }
}
