// Declare all modules
pub mod auth;
pub mod counter;
pub mod display;
pub mod page;
pub mod storage;
pub mod timer;
pub mod utils;

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;

#[cfg(target_arch = "wasm32")]
pub mod web;

// No re-exports here as they're handled in lib.rs
