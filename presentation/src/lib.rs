//! Presentation layer for study-assistant
//!
//! This crate contains CLI definitions, output formatting,
//! progress reporting, and the interactive study session.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{HELP_TEXT, ReplCommand, ReplReply, StudyRepl};
pub use cli::commands::{Cli, DepthArg};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::SearchSpinner;
