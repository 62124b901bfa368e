//! Response record entity and its text rendering.
//!
//! The rendered block is the unit shown to the user and appended to the
//! response log. It is free text for people to read, not a parseable
//! format.

use crate::core::string::excerpt;
use crate::search::hit::SearchHit;
use crate::study::level::{EducationLevel, Subject};
use serde::{Deserialize, Serialize};

/// Number of content characters shown per search result.
pub const CONTENT_EXCERPT_CHARS: usize = 200;

const RULE: &str = "==================================================";

/// Everything known about one answered query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    /// Pre-formatted local timestamp shown in the header.
    pub timestamp: String,
    pub query: String,
    pub level: EducationLevel,
    pub subject: Subject,
    /// Empty when no tip applies.
    pub tip: String,
    pub results: Vec<SearchHit>,
}

impl ResponseRecord {
    pub fn new(timestamp: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            query: query.into(),
            level: EducationLevel::General,
            subject: Subject::General,
            tip: String::new(),
            results: Vec::new(),
        }
    }

    pub fn with_classification(mut self, level: EducationLevel, subject: Subject) -> Self {
        self.level = level;
        self.subject = subject;
        self
    }

    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = tip.into();
        self
    }

    pub fn with_results(mut self, results: Vec<SearchHit>) -> Self {
        self.results = results;
        self
    }

    /// Render the record as a text block (no trailing newline).
    ///
    /// Level, subject and tip lines are omitted when they carry nothing
    /// (general level, general subject, empty tip).
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = vec![
            RULE.to_string(),
            format!("Study Assistant Response [{}]", self.timestamp),
            RULE.to_string(),
            format!("Query: {}", self.query),
        ];

        if !self.level.is_general() {
            lines.push(format!("Education Level: {}", self.level.label()));
        }
        if !self.subject.is_general() {
            lines.push(format!("Subject: {}", self.subject.label()));
        }
        if !self.tip.is_empty() {
            lines.push(format!("Study Tip: {}", self.tip));
        }

        lines.push(String::new());

        if self.results.is_empty() {
            lines.push(format!("No web results found for '{}'.", self.query));
        } else {
            lines.push("Web Results:".to_string());
            for (i, hit) in self.results.iter().enumerate() {
                if i > 0 {
                    lines.push(String::new());
                }
                lines.push(format!("{}. {}", i + 1, hit.title));
                lines.push(format!("   URL: {}", hit.url));
                lines.push(format!(
                    "   {}",
                    excerpt(&hit.content, CONTENT_EXCERPT_CHARS)
                ));
            }
        }

        lines.join("\n")
    }
}
