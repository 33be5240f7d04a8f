//! UI Widgets

mod help;
mod messages;
mod status;

pub use help::HelpWidget;
pub use messages::{LogKind, LogLine, MessagesWidget};
pub use status::StatusWidget;
