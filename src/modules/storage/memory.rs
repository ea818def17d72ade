use std::collections::HashMap;

use super::{KeyValueStore, StorageError};

/// In-memory store with optional failure modes.
///
/// A quota limits the total bytes of keys and values, like the per-origin
/// limit of `localStorage`. A disabled store rejects every write.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
    disabled: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that fails writes once keys and values exceed `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota: Some(bytes),
            ..Self::default()
        }
    }

    /// Store that rejects every write, as with storage turned off in the browser
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.disabled {
            return Err(StorageError::Unavailable(
                "storage is disabled".to_string(),
            ));
        }

        if let Some(quota) = self.quota {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }

        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("a"), None);

        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a"), Some("2".to_string()));
        assert_eq!(store.len(), 1);

        store.remove("a");
        store.remove("a"); // removing twice is fine
        assert!(store.is_empty());
        assert!(!store.contains("a"));
    }

    #[test]
    fn test_quota() {
        let mut store = MemoryStore::with_quota(10);
        store.set("key", "value").unwrap(); // 8 bytes

        // Overwriting does not count the old value twice
        store.set("key", "valu2").unwrap();

        let err = store.set("other", "x").unwrap_err();
        assert!(matches!(
            err,
            StorageError::QuotaExceeded { needed: 14, quota: 10, .. }
        ));
        assert_eq!(store.get("other"), None);
    }

    #[test]
    fn test_disabled_store_rejects_writes() {
        let mut store = MemoryStore::disabled();
        assert!(matches!(
            store.set("a", "b"),
            Err(StorageError::Unavailable(_))
        ));
        assert_eq!(store.get("a"), None);
    }
}
