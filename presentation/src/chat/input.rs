//! Interpretation of one line of interactive input.

use study_domain::Query;

/// What the REPL should do with a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Blank line; nothing to do
    Empty,
    /// `exit` in any case
    Exit,
    /// `help` in any case
    Help,
    /// Anything else is a query
    Ask(Query),
}

impl ReplCommand {
    /// Parse a raw input line.
    ///
    /// Surrounding whitespace is trimmed. Control words are matched
    /// case-insensitively against the whole line, so "help me with matric
    /// math" is a query.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        if line.eq_ignore_ascii_case("exit") {
            return ReplCommand::Exit;
        }
        if line.eq_ignore_ascii_case("help") {
            return ReplCommand::Help;
        }

        match Query::try_new(line) {
            Ok(query) => ReplCommand::Ask(query),
            Err(_) => ReplCommand::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_words_case_insensitive() {
        for line in ["exit", "EXIT", "Exit", "  exit  "] {
            assert_eq!(ReplCommand::parse(line), ReplCommand::Exit);
        }
        for line in ["help", "HELP", "Help\n"] {
            assert_eq!(ReplCommand::parse(line), ReplCommand::Help);
        }
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(ReplCommand::parse(""), ReplCommand::Empty);
        assert_eq!(ReplCommand::parse("   \t"), ReplCommand::Empty);
    }

    #[test]
    fn test_queries() {
        assert_eq!(
            ReplCommand::parse("  PIAIC AI course "),
            ReplCommand::Ask(Query::new("PIAIC AI course"))
        );
        assert_eq!(
            ReplCommand::parse("help me with matric math"),
            ReplCommand::Ask(Query::new("help me with matric math"))
        );
        assert_eq!(
            ReplCommand::parse("exit strategy for bs cs"),
            ReplCommand::Ask(Query::new("exit strategy for bs cs"))
        );
    }
}
