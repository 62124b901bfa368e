//! Append-only text file writer for rendered responses.
//!
//! Each entry is written as-is, UTF-8 encoded, followed by a blank line.
//! The file is opened in append mode, so existing content is never
//! rewritten.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use study_application::ResponseLog;
use tracing::{debug, warn};

/// Default log file name, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "study_assistant_log.txt";

/// Text response log that appends one block per answered query.
///
/// Thread-safe via `Mutex<BufWriter<File>>`, so concurrent callers never
/// interleave entries. Flushes after every entry and on `Drop`.
pub struct TextResponseLog {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl TextResponseLog {
    /// Open (or create) the log at the given path for appending.
    ///
    /// Creates parent directories if needed. Returns `None` if the file
    /// cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create response log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open response log {}: {}", path.display(), e);
                return None;
            }
        };

        debug!("Appending responses to {}", path.display());

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResponseLog for TextResponseLog {
    fn append(&self, entry: &str) {
        let Ok(mut writer) = self.writer.lock() else {
            warn!(
                "Response log {} is unusable after a panic; entry dropped",
                self.path.display()
            );
            return;
        };

        if let Err(e) = write!(writer, "{}\n\n", entry).and_then(|_| writer.flush()) {
            warn!("Could not write to response log {}: {}", self.path.display(), e);
        }
    }
}

impl Drop for TextResponseLog {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
