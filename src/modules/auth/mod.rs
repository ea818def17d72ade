pub mod controller;
pub mod messages;
pub mod validation;

// Re-export the main types and functions
pub use controller::AuthFormController;
pub use messages::{show_message, MessageKind};
pub use validation::credentials_match;
