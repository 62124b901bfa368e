//! Port for the persisted response log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! diagnostic messages, while this port keeps the human-readable answers
//! the user received.

/// Port for appending rendered responses to a persistent log.
///
/// The `append` method is intentionally non-fallible to avoid disrupting
/// the answer flow. Implementations report write failures through
/// `tracing` and carry on.
pub trait ResponseLog: Send + Sync {
    /// Append one rendered response block.
    fn append(&self, entry: &str);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoResponseLog;

impl ResponseLog for NoResponseLog {
    fn append(&self, _entry: &str) {}
}
