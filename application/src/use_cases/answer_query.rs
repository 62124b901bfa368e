//! Answer Query use case
//!
//! The whole QueryAssistant flow for one query:
//! classify → resolve tip → search → compose → append to log.

use crate::config::SearchParams;
use crate::ports::clock::Clock;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::response_log::{NoResponseLog, ResponseLog};
use crate::ports::search_gateway::{SearchError, SearchGateway, SearchRequest};
use std::sync::Arc;
use study_domain::{Query, ResponseRecord, classify, resolve_tip};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while answering a query
#[derive(Error, Debug)]
pub enum AnswerQueryError {
    #[error("Error during search: {0}")]
    Search(#[from] SearchError),
}

/// Output of a successful query
#[derive(Debug, Clone)]
pub struct AnswerQueryOutput {
    pub record: ResponseRecord,
    /// The rendered block, exactly as shown and logged
    pub text: String,
}

/// Use case for answering a study query
pub struct AnswerQueryUseCase<G: SearchGateway + 'static> {
    gateway: Arc<G>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn ResponseLog>,
    params: SearchParams,
}

impl<G: SearchGateway + 'static> AnswerQueryUseCase<G> {
    pub fn new(gateway: Arc<G>, clock: Arc<dyn Clock>) -> Self {
        Self {
            gateway,
            clock,
            log: Arc::new(NoResponseLog),
            params: SearchParams::default(),
        }
    }

    pub fn with_log(mut self, log: Arc<dyn ResponseLog>) -> Self {
        self.log = log;
        self
    }

    pub fn with_params(mut self, params: SearchParams) -> Self {
        self.params = params;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, query: &Query) -> Result<AnswerQueryOutput, AnswerQueryError> {
        self.execute_with_progress(query, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// A search failure short-circuits: nothing is composed and nothing is
    /// logged. Zero results is a normal, logged outcome.
    pub async fn execute_with_progress(
        &self,
        query: &Query,
        progress: &dyn ProgressNotifier,
    ) -> Result<AnswerQueryOutput, AnswerQueryError> {
        let (level, subject) = classify(query.text());
        let tip = resolve_tip(level, subject);
        debug!("Classified query as {}/{}", level, subject);

        let request = SearchRequest::new(query.text(), self.params.depth, self.params.max_results);

        progress.on_search_start(query.text());
        let hits = match self.gateway.search(&request).await {
            Ok(hits) => {
                progress.on_search_complete(true, hits.len());
                hits
            }
            Err(e) => {
                progress.on_search_complete(false, 0);
                warn!("Search failed: {}", e);
                return Err(e.into());
            }
        };
        info!("Search returned {} results", hits.len());

        let record = ResponseRecord::new(self.clock.timestamp(), query.text())
            .with_classification(level, subject)
            .with_tip(tip)
            .with_results(hits);
        let text = record.render();

        self.log.append(&text);

        Ok(AnswerQueryOutput { record, text })
    }

    /// Answer a query as plain text.
    ///
    /// Errors are folded into the returned string (`Error during search: ...`)
    /// so an interactive session can keep going.
    pub async fn respond(&self, query: &Query) -> String {
        self.respond_with_progress(query, &NoProgress).await
    }

    pub async fn respond_with_progress(
        &self,
        query: &Query,
        progress: &dyn ProgressNotifier,
    ) -> String {
        match self.execute_with_progress(query, progress).await {
            Ok(output) => output.text,
            Err(e) => e.to_string(),
        }
    }
}
