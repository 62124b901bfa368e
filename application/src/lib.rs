//! Application layer for study-assistant
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_MAX_RESULTS, SearchParams};
pub use ports::{
    clock::{Clock, TIMESTAMP_FORMAT},
    progress::{NoProgress, ProgressNotifier},
    response_log::{NoResponseLog, ResponseLog},
    search_gateway::{SearchError, SearchGateway, SearchRequest},
};
pub use use_cases::answer_query::{AnswerQueryError, AnswerQueryOutput, AnswerQueryUseCase};
