pub mod controller;
pub mod model;

pub use controller::CounterController;
pub use model::{Counter, CounterStyle};
