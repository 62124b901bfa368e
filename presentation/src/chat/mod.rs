//! Interactive study session
//!
//! Provides a readline-based interactive interface. Each line is either a
//! control word (`help`, `exit`, case-insensitive) or a study query.

mod help;
mod input;
mod repl;

pub use help::HELP_TEXT;
pub use input::ReplCommand;
pub use repl::{ReplReply, StudyRepl};
