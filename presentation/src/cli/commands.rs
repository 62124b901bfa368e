//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use study_domain::SearchDepth;

/// Search depth accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DepthArg {
    /// Faster, shallower search
    Basic,
    /// Slower, more thorough search
    Advanced,
}

impl From<DepthArg> for SearchDepth {
    fn from(arg: DepthArg) -> Self {
        match arg {
            DepthArg::Basic => SearchDepth::Basic,
            DepthArg::Advanced => SearchDepth::Advanced,
        }
    }
}

/// CLI arguments for study-assistant
#[derive(Parser, Debug)]
#[command(name = "study-assistant")]
#[command(author, version, about = "Study assistant - classified study tips plus web search")]
#[command(long_about = r#"
Study Assistant answers a free-text study query in three steps:
1. Classify: detect the education level (PIAIC, Matric, FSc, BS, MPhil)
   and subject from keywords in the query
2. Advise: attach a study tip for that level and subject
3. Search: run a web search for the query and list the top results

Answers are appended to a text log unless --no-log is given.

The search API key is read from TAVILY_API_KEY (a .env file is honoured).

Configuration files are loaded from (in priority order):
1. STUDY_* environment variables
2. --config <path>             Explicit config file
3. ./study-assistant.toml      Project-level config
4. ~/.config/study-assistant/config.toml   Global config

Example:
  study-assistant "PIAIC AI course"
  study-assistant --depth basic matric math past papers
  study-assistant            (interactive mode)
"#)]
pub struct Cli {
    /// Query to answer once; starts interactive mode when omitted
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,

    /// Search depth
    #[arg(short, long, value_enum)]
    pub depth: Option<DepthArg>,

    /// Maximum number of web results
    #[arg(long, value_name = "N")]
    pub max_results: Option<usize>,

    /// Append answers to this file instead of the configured log
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Do not append answers to the log file
    #[arg(long)]
    pub no_log: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The one-shot query, with positional words joined by spaces
    pub fn query_text(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_is_interactive() {
        let cli = Cli::parse_from(["study-assistant"]);
        assert_eq!(cli.query_text(), None);
        assert!(!cli.no_log);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_query_words_are_joined() {
        let cli = Cli::parse_from(["study-assistant", "PIAIC", "AI", "course"]);
        assert_eq!(cli.query_text().as_deref(), Some("PIAIC AI course"));
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "study-assistant",
            "--depth",
            "basic",
            "--max-results",
            "3",
            "--no-log",
            "-vv",
            "fsc physics",
        ]);
        assert_eq!(cli.depth, Some(DepthArg::Basic));
        assert_eq!(SearchDepth::from(DepthArg::Basic), SearchDepth::Basic);
        assert_eq!(cli.max_results, Some(3));
        assert!(cli.no_log);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.query_text().as_deref(), Some("fsc physics"));
    }
}
