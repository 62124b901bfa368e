//! Configuration loading for study-assistant
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `STUDY_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./study-assistant.toml` or `./.study-assistant.toml`
//! 4. Global: `~/.config/study-assistant/config.toml`
//! 5. Default values
//!
//! The search credential is read separately from `TAVILY_API_KEY` (a `.env`
//! file is honoured), falling back to `search.api_key`.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLogConfig, FileOutputConfig, FileSearchConfig,
};
pub use loader::{API_KEY_ENV, ConfigError, ConfigLoader, ENV_PREFIX};
