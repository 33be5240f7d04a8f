//! wander-ui: Terminal UI layer using ratatui
//!
//! Provides the terminal interface for the game: a scrolling message log,
//! a status panel and a command prompt.

pub mod app;
pub mod display;
pub mod input;
pub mod widgets;

pub use app::{App, UiMode};
pub use display::Palette;
