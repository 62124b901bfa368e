//! Clock port
//!
//! Supplies the local time used in response headers, so use cases can be
//! tested against a fixed instant.

use chrono::{DateTime, FixedOffset};

/// Header timestamp format, e.g. `2025-03-01 04:05 PM`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %I:%M %p";

/// Source of the current local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;

    /// The current time formatted with [`TIMESTAMP_FORMAT`].
    fn timestamp(&self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}
