pub mod client;
pub mod controller;
pub mod errors;
pub mod types;

pub use controller::{PaneController, PaneInput};
pub use errors::TmuxError;
