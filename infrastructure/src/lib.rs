//! Infrastructure layer for study-assistant
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod clock;
pub mod config;
pub mod logging;
pub mod search;

// Re-export commonly used types
pub use clock::{FixedOffsetClock, PKT_OFFSET_MINUTES};
pub use config::{
    API_KEY_ENV, ConfigError, ConfigLoader, ConfigValidationError, FileConfig, FileLogConfig,
    FileOutputConfig, FileSearchConfig,
};
pub use logging::{DEFAULT_LOG_FILE, TextResponseLog};
pub use search::{TAVILY_SEARCH_URL, TavilySearchGateway};
