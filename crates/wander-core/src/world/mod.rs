//! World configuration and failure reporting

pub mod errors;
pub mod options;

pub use errors::ActionError;
pub use options::{GameOptions, OptionsError};
