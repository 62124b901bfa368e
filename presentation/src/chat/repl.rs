//! REPL (Read-Eval-Print Loop) for interactive study queries

use super::help::HELP_TEXT;
use super::input::ReplCommand;
use crate::ConsoleFormatter;
use crate::SearchSpinner;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use study_application::{AnswerQueryUseCase, NoProgress, SearchGateway};
use study_domain::Query;
use tracing::debug;

/// Outcome of one REPL command, printed by the loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplReply {
    /// Blank input; prompt again
    Nothing,
    /// Leave the loop
    Exit,
    /// Static help text
    Help(&'static str),
    /// Rendered response block
    Answer(String),
    /// Search failure message
    Failed(String),
}

/// Interactive study REPL
///
/// Handles one query at a time; each query blocks until the search
/// provider replies. Search failures are printed and the loop continues.
pub struct StudyRepl<G: SearchGateway + 'static> {
    use_case: AnswerQueryUseCase<G>,
    show_progress: bool,
    history_path: Option<PathBuf>,
}

impl<G: SearchGateway + 'static> StudyRepl<G> {
    /// Create a new StudyRepl
    pub fn new(use_case: AnswerQueryUseCase<G>) -> Self {
        Self {
            use_case,
            show_progress: true,
            history_path: dirs::data_dir().map(|p| p.join("study-assistant").join("history.txt")),
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Override the history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.history_path = path;
        }
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        println!("{}", ConsoleFormatter::welcome_banner());

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let command = ReplCommand::parse(&line);
                    if let ReplCommand::Ask(ref query) = command {
                        let _ = rl.add_history_entry(query.text());
                        println!();
                    }
                    match self.handle(command).await {
                        ReplReply::Nothing => continue,
                        ReplReply::Exit => {
                            println!("Goodbye! Happy studying.");
                            break;
                        }
                        ReplReply::Help(text) => {
                            println!("{}", text);
                            println!();
                        }
                        ReplReply::Answer(text) => {
                            println!("{}", ConsoleFormatter::format_answer(&text));
                            println!();
                        }
                        ReplReply::Failed(message) => {
                            eprintln!("{}", ConsoleFormatter::format_error(&message));
                            println!();
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Goodbye! Happy studying.");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path
            && let Err(e) = rl.save_history(path)
        {
            debug!("Could not save history to {}: {}", path.display(), e);
        }

        Ok(())
    }

    /// Carry out one parsed command.
    ///
    /// Only `Ask` reaches the search provider and the response log.
    pub async fn handle(&self, command: ReplCommand) -> ReplReply {
        match command {
            ReplCommand::Empty => ReplReply::Nothing,
            ReplCommand::Exit => ReplReply::Exit,
            ReplCommand::Help => ReplReply::Help(HELP_TEXT),
            ReplCommand::Ask(query) => self.process_query(&query).await,
        }
    }

    async fn process_query(&self, query: &Query) -> ReplReply {
        let result = if self.show_progress {
            let spinner = SearchSpinner::new();
            self.use_case.execute_with_progress(query, &spinner).await
        } else {
            self.use_case.execute_with_progress(query, &NoProgress).await
        };

        match result {
            Ok(output) => ReplReply::Answer(output.text),
            Err(e) => ReplReply::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, FixedOffset, TimeZone};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use study_application::{Clock, ResponseLog, SearchError, SearchRequest};
    use study_domain::SearchHit;

    #[derive(Default)]
    struct CountingGateway {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SearchGateway for CountingGateway {
        async fn search(&self, _request: &SearchRequest) -> Result<Vec<SearchHit>, SearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![SearchHit::new(
                "Matric Math Guide",
                "https://example.com/math",
                "Practice every exercise.",
            )])
        }
    }

    #[derive(Default)]
    struct CountingLog {
        entries: AtomicUsize,
    }

    impl ResponseLog for CountingLog {
        fn append(&self, _entry: &str) {
            self.entries.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<FixedOffset> {
            FixedOffset::east_opt(5 * 3600)
                .unwrap()
                .with_ymd_and_hms(2025, 3, 1, 9, 30, 0)
                .unwrap()
        }
    }

    fn repl() -> (StudyRepl<CountingGateway>, Arc<CountingGateway>, Arc<CountingLog>) {
        let gateway = Arc::new(CountingGateway::default());
        let log = Arc::new(CountingLog::default());
        let use_case =
            AnswerQueryUseCase::new(gateway.clone(), Arc::new(FixedClock)).with_log(log.clone());
        let repl = StudyRepl::new(use_case).with_progress(false);
        (repl, gateway, log)
    }

    #[tokio::test]
    async fn test_help_does_not_search_or_log() {
        let (repl, gateway, log) = repl();

        let reply = repl.handle(ReplCommand::parse("HELP")).await;

        assert_eq!(reply, ReplReply::Help(HELP_TEXT));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
        assert_eq!(log.entries.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_exit_and_blank_lines_are_silent() {
        let (repl, gateway, log) = repl();

        assert_eq!(repl.handle(ReplCommand::parse("exit")).await, ReplReply::Exit);
        assert_eq!(repl.handle(ReplCommand::parse("   ")).await, ReplReply::Nothing);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
        assert_eq!(log.entries.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_query_searches_once_and_logs_once() {
        let (repl, gateway, log) = repl();

        let reply = repl.handle(ReplCommand::parse("matric math tips")).await;

        match reply {
            ReplReply::Answer(text) => {
                assert!(text.contains("Query: matric math tips"));
                assert!(text.contains("1. Matric Math Guide"));
            }
            other => panic!("expected an answer, got {:?}", other),
        }
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
        assert_eq!(log.entries.load(Ordering::SeqCst), 1);
    }
}
