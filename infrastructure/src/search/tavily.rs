//! Tavily web search adapter.
//!
//! Implements [`SearchGateway`] against the Tavily search endpoint:
//!
//! | Field | Value |
//! |-------|-------|
//! | `query` | the raw query text |
//! | `search_depth` | `basic` or `advanced` |
//! | `max_results` | upper bound on results |
//!
//! The response is expected to carry a `results` array of
//! `{title, url, content}` objects. A missing or non-array `results` field is
//! treated as zero results. Transport failures, non-2xx statuses and
//! undecodable bodies are [`SearchError`]s.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use study_application::{SearchError, SearchGateway, SearchRequest};
use study_domain::{SearchDepth, SearchHit};
use tracing::debug;

/// Tavily search endpoint.
pub const TAVILY_SEARCH_URL: &str = "https://api.tavily.com/search";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    search_depth: SearchDepth,
    max_results: usize,
}

/// [`SearchGateway`] backed by the Tavily HTTP API.
pub struct TavilySearchGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl TavilySearchGateway {
    /// Create a gateway for the public Tavily endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self, SearchError> {
        Self::with_options(api_key, TAVILY_SEARCH_URL, DEFAULT_TIMEOUT)
    }

    /// Create a gateway with a custom endpoint and timeout.
    pub fn with_options(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("StudyAssistant/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SearchError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl SearchGateway for TavilySearchGateway {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, SearchError> {
        let body = TavilyRequest {
            api_key: &self.api_key,
            query: &request.query,
            search_depth: request.depth,
            max_results: request.max_results,
        };

        debug!(
            "POST {} (depth={}, max_results={})",
            self.endpoint, request.depth, request.max_results
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;

        Ok(parse_results(&data))
    }
}

/// Extract hits from a Tavily response body, keeping their order.
fn parse_results(data: &serde_json::Value) -> Vec<SearchHit> {
    let Some(results) = data["results"].as_array() else {
        return Vec::new();
    };

    results
        .iter()
        .filter(|r| r.is_object())
        .map(|r| {
            SearchHit::new(
                r["title"].as_str().unwrap_or_default(),
                r["url"].as_str().unwrap_or_default(),
                r["content"].as_str().unwrap_or_default(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[test]
    fn test_parse_results_keeps_order() {
        let data = serde_json::json!({
            "query": "matric math",
            "results": [
                {"title": "B", "url": "https://b.example", "content": "second", "score": 0.4},
                {"title": "A", "url": "https://a.example", "content": "first", "score": 0.9}
            ]
        });

        let hits = parse_results(&data);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0], SearchHit::new("B", "https://b.example", "second"));
        assert_eq!(hits[1].title, "A");
    }

    #[test]
    fn test_parse_results_missing_or_invalid() {
        assert!(parse_results(&serde_json::json!({})).is_empty());
        assert!(parse_results(&serde_json::json!({"results": null})).is_empty());
        assert!(parse_results(&serde_json::json!({"results": "oops"})).is_empty());
        assert!(parse_results(&serde_json::json!({"results": []})).is_empty());
    }

    #[test]
    fn test_parse_results_missing_fields_default_to_empty() {
        let data = serde_json::json!({"results": [{"title": "Only title"}, 42]});
        let hits = parse_results(&data);
        assert_eq!(hits, vec![SearchHit::new("Only title", "", "")]);
    }

    fn gateway(server: &mockito::ServerGuard) -> TavilySearchGateway {
        TavilySearchGateway::with_options(
            "test-key",
            format!("{}/search", server.url()),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_search_sends_request_and_parses_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/search")
            .match_header("authorization", "Bearer test-key")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "query": "PIAIC AI course",
                "search_depth": "advanced",
                "max_results": 5
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"results":[{"title":"PIAIC","url":"https://piaic.org","content":"AI program"}]}"#,
            )
            .create_async()
            .await;

        let request = SearchRequest::new("PIAIC AI course", SearchDepth::Advanced, 5);
        let hits = gateway(&server).search(&request).await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            hits,
            vec![SearchHit::new("PIAIC", "https://piaic.org", "AI program")]
        );
    }

    #[tokio::test]
    async fn test_search_empty_results() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/search")
            .with_status(200)
            .with_body(r#"{"results":[]}"#)
            .create_async()
            .await;

        let request = SearchRequest::new("nothing", SearchDepth::Basic, 5);
        let hits = gateway(&server).search(&request).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_search_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/search")
            .with_status(401)
            .with_body("invalid api key")
            .create_async()
            .await;

        let request = SearchRequest::new("q", SearchDepth::Advanced, 5);
        let err = gateway(&server).search(&request).await.unwrap_err();

        match err {
            SearchError::Status { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid api key");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_search_invalid_json() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/search")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let request = SearchRequest::new("q", SearchDepth::Advanced, 5);
        let err = gateway(&server).search(&request).await.unwrap_err();
        assert!(matches!(err, SearchError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_search_connection_failure() {
        let gateway = TavilySearchGateway::with_options(
            "k",
            "http://127.0.0.1:1/search",
            Duration::from_secs(2),
        )
        .unwrap();

        let request = SearchRequest::new("q", SearchDepth::Advanced, 5);
        let err = gateway.search(&request).await.unwrap_err();
        assert!(matches!(err, SearchError::RequestFailed(_)));
    }
}
