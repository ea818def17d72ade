use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DomException, Storage, Window};

use crate::modules::storage::{KeyValueStore, StorageError};

/// `window.localStorage` behind the store trait.
///
/// When the browser refuses access to storage every read is empty and every
/// write fails with [`StorageError::Unavailable`].
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(Some(storage)) => Some(storage),
            Ok(None) => {
                warn!("localStorage is not available");
                None
            }
            Err(e) => {
                warn!("Access to localStorage denied: {}", describe(&e));
                None
            }
        };
        Self { storage }
    }
}

/// Readable form of a thrown JS value
fn describe(error: &JsValue) -> String {
    match error.dyn_ref::<DomException>() {
        Some(exception) => format!("{}: {}", exception.name(), exception.message()),
        None => format!("{:?}", error),
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage is not available".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(describe(&e)))
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.remove_item(key) {
                warn!("Failed to remove '{}': {}", key, describe(&e));
            }
        }
    }
}
