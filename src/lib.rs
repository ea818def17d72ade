// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{auth, counter, display, page, storage, timer, utils};

#[cfg(not(target_arch = "wasm32"))]
pub use modules::{config, terminal};

#[cfg(target_arch = "wasm32")]
pub use modules::web;

// Re-export commonly used types
pub use modules::display::{DisplaySurface, ElementId, MemorySurface};
pub use modules::page::{Button, Host, Page, PageEvent, ReadyState};
pub use modules::storage::{KeyValueStore, MemoryStore, SavedCredentials, StorageError};
#[cfg(not(target_arch = "wasm32"))]
pub use modules::storage::JsonFileStore;
pub use modules::timer::{TimerFacility, TimerQueue, TimerTask};

// Storage keys of the persisted credential record
pub const LOGIN_KEY: &str = "webAppLab_login";
pub const PASSWORD_KEY: &str = "webAppLab_password";

// The only credential pair the login form accepts
pub const ACCEPTED_LOGIN: &str = "admin";
pub const ACCEPTED_PASSWORD: &str = "admin";

/// Delay after which a transient message falls back to the neutral style
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 5000;
