//! Query value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A free-text study query (Value Object)
///
/// The raw text is kept verbatim: classification lowercases its own copy,
/// and the search provider and response record both see exactly what the
/// user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    text: String,
}

impl Query {
    /// Create a new query. Any text is accepted, including empty text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Create a query, rejecting empty or whitespace-only input.
    ///
    /// Used by the interactive surfaces, which have nothing to search for
    /// on a blank line.
    pub fn try_new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            Err(DomainError::EmptyQuery)
        } else {
            Ok(Self { text })
        }
    }

    /// Get the query text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Query::new(s)
    }
}

impl From<String> for Query {
    fn from(s: String) -> Self {
        Query::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_creation() {
        let q = Query::new("PIAIC AI course");
        assert_eq!(q.text(), "PIAIC AI course");
    }

    #[test]
    fn test_query_from_str() {
        let q: Query = "Matric math".into();
        assert_eq!(q.text(), "Matric math");
    }

    #[test]
    fn test_empty_query_is_allowed() {
        assert_eq!(Query::new("").text(), "");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(matches!(Query::try_new(""), Err(DomainError::EmptyQuery)));
        assert!(Query::try_new("   ").is_err());
    }

    #[test]
    fn test_try_new_keeps_text_verbatim() {
        let q = Query::try_new("  FSc Physics  ").unwrap();
        assert_eq!(q.text(), "  FSc Physics  ");
    }
}
