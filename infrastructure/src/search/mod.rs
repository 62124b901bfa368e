//! Search provider adapters.

mod tavily;

pub use tavily::{DEFAULT_TIMEOUT, TAVILY_SEARCH_URL, TavilySearchGateway};
