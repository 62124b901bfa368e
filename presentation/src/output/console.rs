//! Console output formatting
//!
//! The answer text is shown exactly as composed (and logged); styling only
//! adds terminal colors, which `colored` drops when color is disabled.

use colored::Colorize;

/// Line prefixes highlighted in an answer block
const LABELS: [&str; 6] = [
    "Query:",
    "Education Level:",
    "Subject:",
    "Study Tip:",
    "Web Results:",
    "   URL:",
];

/// Formats study answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner printed when the interactive session starts
    pub fn welcome_banner() -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&format!(
            "{}\n",
            "╭─────────────────────────────────────────────╮".cyan()
        ));
        output.push_str(&format!(
            "{}\n",
            "│              Study Assistant                │".cyan().bold()
        ));
        output.push_str(&format!(
            "{}\n",
            "╰─────────────────────────────────────────────╯".cyan()
        ));
        output.push('\n');
        output.push_str("Ask a study question, or type 'help' or 'exit'.\n");
        output
    }

    /// Highlight the section labels of a rendered answer
    pub fn format_answer(text: &str) -> String {
        text.lines()
            .map(Self::style_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a per-query error message
    pub fn format_error(message: &str) -> String {
        message.red().to_string()
    }

    fn style_line(line: &str) -> String {
        if line.starts_with("=====") {
            return line.cyan().to_string();
        }
        if line.starts_with("No web results found") {
            return line.yellow().to_string();
        }
        for label in LABELS {
            if let Some(rest) = line.strip_prefix(label) {
                return format!("{}{}", label.cyan().bold(), rest);
            }
        }
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_answer_preserves_text_without_color() {
        colored::control::set_override(false);
        let text = "=====\nQuery: PIAIC AI course\nEducation Level: PIAIC\n\nNo web results found for 'x'.";
        assert_eq!(ConsoleFormatter::format_answer(text), text);
        assert_eq!(
            ConsoleFormatter::format_error("Error during search: boom"),
            "Error during search: boom"
        );
    }

    #[test]
    fn test_welcome_banner_mentions_commands() {
        let banner = ConsoleFormatter::welcome_banner();
        assert!(banner.contains("help"));
        assert!(banner.contains("exit"));
    }
}
