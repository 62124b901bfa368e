//! Search parameters: what the use case asks the search provider for.

use serde::{Deserialize, Serialize};
use study_domain::SearchDepth;

/// Default number of results requested per query.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Static parameters sent with every search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Search depth requested from the provider.
    pub depth: SearchDepth,
    /// Upper bound on returned results.
    pub max_results: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            depth: SearchDepth::Advanced,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl SearchParams {
    pub fn with_depth(mut self, depth: SearchDepth) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = SearchParams::default();
        assert_eq!(params.depth, SearchDepth::Advanced);
        assert_eq!(params.max_results, 5);
    }

    #[test]
    fn test_builders() {
        let params = SearchParams::default()
            .with_depth(SearchDepth::Basic)
            .with_max_results(3);
        assert_eq!(params.depth, SearchDepth::Basic);
        assert_eq!(params.max_results, 3);
    }
}
