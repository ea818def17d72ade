pub mod credentials;
#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod memory;

use std::fmt;
use std::io;

// Re-export the main types and functions
pub use credentials::{clear_credentials, load_credentials, save_credentials, SavedCredentials};
#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Error type for store writes
#[derive(Debug)]
pub enum StorageError {
    QuotaExceeded { key: String, needed: usize, quota: usize },
    Unavailable(String),
    Io(io::Error),
    Serialization(serde_json::Error),
}

// Implement conversion from io::Error to StorageError
impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::Io(error)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::Serialization(error)
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::QuotaExceeded { key, needed, quota } => write!(
                f,
                "Quota exceeded while writing '{}': {} bytes needed, quota is {} bytes",
                key, needed, quota
            ),
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Io(e) => write!(f, "IO error: {}", e),
            StorageError::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

/// Persistent string key-value store, modelled on browser `localStorage`.
///
/// Only writes can fail. Reads of a missing key give `None` and removing a
/// missing key does nothing.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str);

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let quota = StorageError::QuotaExceeded {
            key: "k".to_string(),
            needed: 12,
            quota: 8,
        };
        assert_eq!(
            quota.to_string(),
            "Quota exceeded while writing 'k': 12 bytes needed, quota is 8 bytes"
        );
        assert!(quota.source().is_none());

        let io_error: StorageError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(io_error.to_string(), "IO error: denied");
        assert!(io_error.source().is_some());
    }
}
