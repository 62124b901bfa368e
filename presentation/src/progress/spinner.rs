//! Spinner shown while the search provider is working

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use study_application::ProgressNotifier;

/// Reports search progress with an animated spinner on stderr
pub struct SearchSpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl SearchSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for SearchSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for SearchSpinner {
    fn on_search_start(&self, query: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("Searching the web for {}...", query.bold()));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_search_complete(&self, _success: bool, _hits: usize) {
        if let Ok(mut slot) = self.bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}
