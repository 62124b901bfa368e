//! Response logging: the persisted, human-readable answer log.
//!
//! Provides [`TextResponseLog`], an append-only text writer that implements
//! the [`ResponseLog`](study_application::ResponseLog) port.

mod text_log;

pub use text_log::{DEFAULT_LOG_FILE, TextResponseLog};
