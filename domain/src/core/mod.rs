//! Core domain concepts shared across all subdomains.
//!
//! - [`query::Query`]: the raw study query
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: excerpt helper used when rendering search results

pub mod error;
pub mod query;
pub mod string;
