//! Static help text for the interactive session.

/// Shown for the `help` command. Printed as-is; no search is performed.
pub const HELP_TEXT: &str = "\
Study Assistant - Help

Type a study question and press Enter. The assistant will:
  - detect your education level (PIAIC, Matric, FSc, BS, MPhil)
  - detect the subject (e.g. AI, Math, Physics, CS, Research)
  - give you a study tip for that level and subject
  - search the web and list the top results

Examples:
  PIAIC AI course
  Matric math past papers
  FSc physics numericals
  BS computer science internships
  MPhil thesis writing tips

Commands:
  help  - Show this help
  exit  - Quit the assistant";
