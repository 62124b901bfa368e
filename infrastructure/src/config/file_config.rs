//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use crate::clock::PKT_OFFSET_MINUTES;
use crate::logging::DEFAULT_LOG_FILE;
use crate::search::TAVILY_SEARCH_URL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use study_application::{DEFAULT_MAX_RESULTS, SearchParams};
use study_domain::SearchDepth;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("search.max_results must be greater than 0")]
    InvalidMaxResults,

    #[error("search.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("search.endpoint cannot be empty")]
    EmptyEndpoint,

    #[error("log.path cannot be empty")]
    EmptyLogPath,

    #[error("utc_offset_minutes must be within ±1439, got {0}")]
    InvalidUtcOffset(i32),
}

/// Raw search configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Tavily API key (the `TAVILY_API_KEY` environment variable wins)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Search endpoint URL
    pub endpoint: String,
    /// Search depth (uses domain type)
    pub search_depth: SearchDepth,
    /// Maximum results per query
    pub max_results: usize,
    /// HTTP timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: TAVILY_SEARCH_URL.to_string(),
            search_depth: SearchDepth::Advanced,
            max_results: DEFAULT_MAX_RESULTS,
            timeout_seconds: 30,
        }
    }
}

impl FileSearchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Raw response log configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Append answers to the log file
    pub enabled: bool,
    /// Path to the log file
    pub path: PathBuf,
}

impl Default for FileLogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Show a spinner while searching
    pub show_progress: bool,
    /// Path to REPL history file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_file: Option<String>,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_progress: true,
            history_file: None,
        }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Offset from UTC for response timestamps, in minutes
    pub utc_offset_minutes: i32,
    pub search: FileSearchConfig,
    pub log: FileLogConfig,
    pub output: FileOutputConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: PKT_OFFSET_MINUTES,
            search: FileSearchConfig::default(),
            log: FileLogConfig::default(),
            output: FileOutputConfig::default(),
        }
    }
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.search.max_results == 0 {
            return Err(ConfigValidationError::InvalidMaxResults);
        }
        if self.search.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.search.endpoint.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint);
        }
        if self.log.enabled && self.log.path.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyLogPath);
        }
        if self.utc_offset_minutes.abs() >= 24 * 60 {
            return Err(ConfigValidationError::InvalidUtcOffset(
                self.utc_offset_minutes,
            ));
        }
        Ok(())
    }

    /// Search parameters for the use case
    pub fn search_params(&self) -> SearchParams {
        SearchParams::default()
            .with_depth(self.search.search_depth)
            .with_max_results(self.search.max_results)
    }

    /// Copy with the API key masked, for display
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.search.api_key.is_some() {
            copy.search.api_key = Some("********".to_string());
        }
        copy
    }
}
