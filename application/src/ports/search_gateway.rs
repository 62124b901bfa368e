//! Search Gateway port
//!
//! Defines the interface for querying an external web search provider.

use async_trait::async_trait;
use study_domain::{SearchDepth, SearchHit};
use thiserror::Error;

/// Errors that can occur during search gateway operations
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Search API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse search response: {0}")]
    InvalidResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// A single search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// The literal query text, passed through unmodified
    pub query: String,
    pub depth: SearchDepth,
    pub max_results: usize,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, depth: SearchDepth, max_results: usize) -> Self {
        Self {
            query: query.into(),
            depth,
            max_results,
        }
    }
}

/// Gateway for web search
///
/// Implementations (adapters) live in the infrastructure layer. A
/// response without a usable result list is zero hits, not an error.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Run a search and return hits in the provider's relevance order
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, SearchError>;
}
