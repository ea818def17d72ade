pub mod memory;
pub mod surface;

// Re-export the main types
pub use memory::{ElementState, MemorySurface};
pub use surface::{DisplaySurface, ElementId};

// Fixed visual values of the page
pub const READY_STATUS_TEXT: &str = "Page fully loaded!";
pub const READY_STATUS_COLOR: &str = "#2ecc71";
pub const NEGATIVE_COUNTER_COLOR: &str = "#e74c3c";
pub const NON_NEGATIVE_COUNTER_COLOR: &str = "#2c3e50";
pub const MESSAGE_CLASS: &str = "message";
