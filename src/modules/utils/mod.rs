#[cfg(not(target_arch = "wasm32"))]
pub mod io;
pub mod logging;
