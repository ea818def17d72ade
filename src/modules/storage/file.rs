use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use tempfile::NamedTempFile;

use super::{KeyValueStore, StorageError};

/// Key-value store persisted as a JSON object in a single file.
///
/// The file is read once when the store is opened and rewritten after every
/// change, so a new process opening the same path sees the same entries.
/// A change whose write fails is undone in memory as well.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. A file that cannot be read or parsed
    /// is also treated as empty and replaced on the next write.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match load_entries(&path) {
            Ok(entries) => entries,
            Err(StorageError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No store file at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => {
                warn!(
                    "Ignoring unreadable store file {}: {}",
                    path.display(),
                    e
                );
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the entries to a temporary file next to the store, then rename
    /// it over the store file so readers only ever see a complete file
    fn persist(&self) -> Result<(), StorageError> {
        let data = serde_json::to_string_pretty(&self.entries)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(data.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

fn load_entries(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
    let mut data = String::new();
    File::open(path)?.read_to_string(&mut data)?;
    Ok(serde_json::from_str(&data)?)
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist() {
            // Keep memory in line with what is on disk
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        let Some(previous) = self.entries.remove(key) else {
            return;
        };
        if let Err(e) = self.persist() {
            warn!("Failed to persist removal of '{}': {}", key, e);
            self.entries.insert(key.to_string(), previous);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("store.json"));
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn test_entries_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(&path);
        store.set("webAppLab_login", "admin").unwrap();
        store.set("webAppLab_password", "admin").unwrap();
        store.remove("webAppLab_password");
        drop(store);

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("webAppLab_login"), Some("admin".to_string()));
        assert_eq!(reopened.get("webAppLab_password"), None);
    }

    #[test]
    fn test_corrupt_file_is_treated_as_empty() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let mut store = JsonFileStore::open(file.path());
        assert_eq!(store.get("a"), None);

        // The next write replaces the corrupt content
        store.set("a", "b").unwrap();
        let reopened = JsonFileStore::open(file.path());
        assert_eq!(reopened.get("a"), Some("b".to_string()));
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let dir = tempdir().unwrap();
        // A directory cannot be opened as a file for writing
        let mut store = JsonFileStore::open(dir.path());

        let result = store.set("a", "b");
        assert!(matches!(result, Err(StorageError::Io(_))));
        assert_eq!(store.get("a"), None);
    }

    #[test]
    fn test_write_leaves_only_the_store_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(&path);
        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("store.json")]);
        assert_eq!(JsonFileStore::open(&path).get("a"), Some("2".to_string()));
    }

    #[test]
    fn test_failed_write_keeps_previous_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut store = JsonFileStore::open(&path);
        store.set("a", "1").unwrap();

        // Swap the store file for a directory so the rename onto it fails
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();
        assert!(store.set("a", "2").is_err());
        assert_eq!(store.get("a"), Some("1".to_string()));
        assert!(path.is_dir());
    }

    #[test]
    fn test_failed_remove_keeps_entry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut store = JsonFileStore::open(&path);
        store.set("webAppLab_login", "admin").unwrap();

        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();
        store.remove("webAppLab_login");
        assert_eq!(store.get("webAppLab_login"), Some("admin".to_string()));
    }
}
