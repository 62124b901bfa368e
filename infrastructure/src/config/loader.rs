//! Configuration file loader with multi-source merging

use super::file_config::{ConfigValidationError, FileConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable holding the search API credential.
pub const API_KEY_ENV: &str = "TAVILY_API_KEY";

/// Prefix for environment overrides, e.g. `STUDY_SEARCH__MAX_RESULTS=3`.
pub const ENV_PREFIX: &str = "STUDY_";

const APP_DIR: &str = "study-assistant";
const PROJECT_FILES: [&str; 2] = ["study-assistant.toml", ".study-assistant.toml"];

/// Errors raised while building the startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required credential {0}. Set it in the environment or in a .env file.")]
    MissingCredential(&'static str),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `STUDY_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./study-assistant.toml` or `./.study-assistant.toml`
    /// 4. Global: `~/.config/study-assistant/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Using global config {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            debug!("Using project config {}", path.display());
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            debug!("Using explicit config {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: FileConfig = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Load a `.env` file from the working directory or its parents.
    ///
    /// Returns the path that was loaded, if any. Variables already set in
    /// the environment are not overridden.
    pub fn load_dotenv() -> Option<PathBuf> {
        dotenv::dotenv().ok()
    }

    /// Resolve the search API key from the environment, then the config file.
    ///
    /// Absence is fatal for the caller: the assistant cannot search without it.
    pub fn api_key(config: &FileConfig) -> Result<String, ConfigError> {
        resolve_api_key(std::env::var(API_KEY_ENV).ok(), config.search.api_key.as_deref())
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] {}* variables, {}", ENV_PREFIX, API_KEY_ENV);

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./study-assistant.toml or ./.study-assistant.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }

    /// Print the merged configuration with the API key masked
    pub fn print_effective(config: &FileConfig) {
        println!();
        println!("Effective configuration:");
        match toml::to_string_pretty(&config.redacted()) {
            Ok(text) => println!("{}", text),
            Err(e) => println!("  (could not render configuration: {})", e),
        }
    }
}

/// Pick the credential: environment first, then config file. Blank values
/// count as missing.
fn resolve_api_key(
    env_value: Option<String>,
    file_value: Option<&str>,
) -> Result<String, ConfigError> {
    env_value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| {
            file_value
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string)
        })
        .ok_or(ConfigError::MissingCredential(API_KEY_ENV))
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_domain::SearchDepth;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.search.max_results, 5);
        assert!(config.log.enabled);
    }

    #[test]
    fn test_global_config_path_mentions_app() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("study-assistant"));
        }
    }

    #[test]
    fn test_load_explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[search]\nsearch_depth = \"basic\"\nmax_results = 2\n\n[log]\npath = \"out/answers.txt\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.search.search_depth, SearchDepth::Basic);
        assert_eq!(config.search.max_results, 2);
        assert_eq!(config.log.path, PathBuf::from("out/answers.txt"));
        assert!(config.output.show_progress);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[search]\nmax_results = 0\n").unwrap();

        let err = ConfigLoader::load(Some(&path)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(ConfigValidationError::InvalidMaxResults)
        ));
    }

    #[test]
    fn test_load_rejects_unknown_depth() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[search]\nsearch_depth = \"deep\"\n").unwrap();

        assert!(matches!(
            ConfigLoader::load(Some(&path)),
            Err(ConfigError::Load(_))
        ));
    }

    #[test]
    fn test_project_config_lookup() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ConfigLoader::project_config_in(dir.path()).is_none());

        std::fs::write(dir.path().join(".study-assistant.toml"), "").unwrap();
        assert_eq!(
            ConfigLoader::project_config_in(dir.path()),
            Some(dir.path().join(".study-assistant.toml"))
        );

        std::fs::write(dir.path().join("study-assistant.toml"), "").unwrap();
        assert_eq!(
            ConfigLoader::project_config_in(dir.path()),
            Some(dir.path().join("study-assistant.toml"))
        );
    }

    #[test]
    fn test_resolve_api_key_prefers_env() {
        let key = resolve_api_key(Some("env-key".to_string()), Some("file-key")).unwrap();
        assert_eq!(key, "env-key");
    }

    #[test]
    fn test_resolve_api_key_falls_back_to_file() {
        let key = resolve_api_key(None, Some("file-key")).unwrap();
        assert_eq!(key, "file-key");
        let key = resolve_api_key(Some("  ".to_string()), Some("file-key")).unwrap();
        assert_eq!(key, "file-key");
    }

    #[test]
    fn test_missing_api_key_names_credential() {
        let err = resolve_api_key(None, None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential("TAVILY_API_KEY")));
        assert!(err.to_string().contains("TAVILY_API_KEY"));

        assert!(resolve_api_key(Some(String::new()), Some("")).is_err());
    }
}
