//! Application-level configuration.
//!
//! - [`SearchParams`]: depth and result count sent with every search

pub mod search_params;

pub use search_params::{DEFAULT_MAX_RESULTS, SearchParams};
