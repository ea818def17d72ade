use log::warn;

use super::{KeyValueStore, StorageError};
use crate::{LOGIN_KEY, PASSWORD_KEY};

/// Credential record kept in the store under the two fixed keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedCredentials {
    pub login: String,
    pub password: String,
}

impl SavedCredentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}

/// Write both keys of the record.
///
/// If the second write fails the login key goes back to the value it had
/// before the call, so a failed save leaves the store as it found it.
pub fn save_credentials<S: KeyValueStore + ?Sized>(
    store: &mut S,
    credentials: &SavedCredentials,
) -> Result<(), StorageError> {
    let previous_login = store.get(LOGIN_KEY);
    store.set(LOGIN_KEY, &credentials.login)?;
    if let Err(e) = store.set(PASSWORD_KEY, &credentials.password) {
        restore_login(store, previous_login);
        return Err(e);
    }
    Ok(())
}

fn restore_login<S: KeyValueStore + ?Sized>(store: &mut S, previous: Option<String>) {
    match previous {
        Some(login) => {
            if let Err(e) = store.set(LOGIN_KEY, &login) {
                warn!("Failed to restore previous login after a failed save: {}", e);
            }
        }
        None => store.remove(LOGIN_KEY),
    }
}

/// Read the record; `None` unless both keys are present
pub fn load_credentials<S: KeyValueStore + ?Sized>(store: &S) -> Option<SavedCredentials> {
    let login = store.get(LOGIN_KEY)?;
    let password = store.get(PASSWORD_KEY)?;
    Some(SavedCredentials { login, password })
}

/// Delete both keys; missing keys are ignored
pub fn clear_credentials<S: KeyValueStore + ?Sized>(store: &mut S) {
    store.remove(LOGIN_KEY);
    store.remove(PASSWORD_KEY);
}
