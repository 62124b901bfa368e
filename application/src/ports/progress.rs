//! Progress notification port
//!
//! Defines the interface for reporting progress while a query is answered.

/// Callback for progress updates during a query
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called right before the search provider is contacted
    fn on_search_start(&self, query: &str);

    /// Called when the search provider replied or failed
    fn on_search_complete(&self, success: bool, hits: usize);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_search_start(&self, _query: &str) {}
    fn on_search_complete(&self, _success: bool, _hits: usize) {}
}
