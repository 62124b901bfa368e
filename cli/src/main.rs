//! CLI entrypoint for Study Assistant
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use study_application::{AnswerQueryUseCase, NoResponseLog, ResponseLog};
use study_infrastructure::{
    ConfigLoader, FileConfig, FixedOffsetClock, TavilySearchGateway, TextResponseLog,
};
use study_presentation::{
    Cli, ConsoleFormatter, HELP_TEXT, ReplCommand, SearchSpinner, StudyRepl,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Study Assistant");

    if let Some(path) = ConfigLoader::load_dotenv() {
        debug!("Loaded environment from {}", path.display());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    apply_cli_overrides(&mut config, &cli);
    config.validate()?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        ConfigLoader::print_effective(&config);
        return Ok(());
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // Fatal before any query is processed
    let api_key = ConfigLoader::api_key(&config)?;

    // === Dependency Injection ===
    let gateway = Arc::new(TavilySearchGateway::with_options(
        api_key,
        config.search.endpoint.clone(),
        config.search.timeout(),
    )?);

    let clock = FixedOffsetClock::from_minutes(config.utc_offset_minutes).unwrap_or_default();

    let log: Arc<dyn ResponseLog> = if config.log.enabled {
        match TextResponseLog::new(&config.log.path) {
            Some(log) => {
                info!("Response log: {}", log.path().display());
                Arc::new(log)
            }
            None => {
                warn!("Response logging disabled for this session");
                Arc::new(NoResponseLog)
            }
        }
    } else {
        Arc::new(NoResponseLog)
    };

    let use_case = AnswerQueryUseCase::new(gateway, Arc::new(clock))
        .with_log(log)
        .with_params(config.search_params());

    // Single query mode
    if let Some(text) = cli.query_text() {
        match ReplCommand::parse(&text) {
            ReplCommand::Empty => bail!("Query cannot be empty"),
            ReplCommand::Exit => {}
            ReplCommand::Help => println!("{}", HELP_TEXT),
            ReplCommand::Ask(query) => {
                let result = if config.output.show_progress {
                    use_case
                        .execute_with_progress(&query, &SearchSpinner::new())
                        .await
                } else {
                    use_case.execute(&query).await
                };

                match result {
                    Ok(output) => println!("{}", ConsoleFormatter::format_answer(&output.text)),
                    Err(e) => {
                        eprintln!("{}", ConsoleFormatter::format_error(&e.to_string()));
                        std::process::exit(1);
                    }
                }
            }
        }
        return Ok(());
    }

    // Interactive mode
    let repl = StudyRepl::new(use_case)
        .with_progress(config.output.show_progress)
        .with_history_file(config.output.history_file.as_ref().map(PathBuf::from));

    repl.run().await?;

    Ok(())
}

/// Command-line flags win over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(depth) = cli.depth {
        config.search.search_depth = depth.into();
    }
    if let Some(max) = cli.max_results {
        config.search.max_results = max;
    }
    if let Some(path) = &cli.log_file {
        config.log.path = path.clone();
        config.log.enabled = true;
    }
    if cli.no_log {
        config.log.enabled = false;
    }
    if cli.quiet {
        config.output.show_progress = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_domain::SearchDepth;

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::parse_from([
            "study-assistant",
            "--depth",
            "basic",
            "--max-results",
            "7",
            "--log-file",
            "answers.txt",
            "-q",
        ]);
        let mut config = FileConfig::default();
        config.log.enabled = false;

        apply_cli_overrides(&mut config, &cli);

        assert_eq!(config.search.search_depth, SearchDepth::Basic);
        assert_eq!(config.search.max_results, 7);
        assert_eq!(config.log.path, PathBuf::from("answers.txt"));
        assert!(config.log.enabled);
        assert!(!config.output.show_progress);
    }

    #[test]
    fn test_no_log_wins_over_log_file() {
        let cli = Cli::parse_from(["study-assistant", "--log-file", "a.txt", "--no-log"]);
        let mut config = FileConfig::default();

        apply_cli_overrides(&mut config, &cli);

        assert!(!config.log.enabled);
    }

    #[test]
    fn test_no_flags_leave_config_untouched() {
        let cli = Cli::parse_from(["study-assistant"]);
        let mut config = FileConfig::default();

        apply_cli_overrides(&mut config, &cli);

        assert_eq!(config.search.max_results, 5);
        assert!(config.log.enabled);
        assert!(config.output.show_progress);
    }
}
