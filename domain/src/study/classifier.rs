//! Keyword classifier: query text → ([`EducationLevel`], [`Subject`]).
//!
//! Rules are evaluated top to bottom and the first match wins, so the
//! order of [`LEVEL_RULES`] and of each level's subject list is the
//! tie-break policy. A query containing both "piaic" and "matric" is a
//! PIAIC query because the PIAIC rule comes first.
//!
//! Matching is case-insensitive. Most keywords match as substrings. The
//! short ones are anchored to word starts: `ai` and `cs` must be whole
//! words, and `bs` must begin a word ("BSCS", "BSc"). Otherwise "piaic"
//! would always read as an AI query and "jobs" as a BS query.

use super::level::{EducationLevel, Subject};

/// A single keyword and how it is matched against the lowercased query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// Matches anywhere in the query.
    Substring(&'static str),
    /// Matches only a whole alphanumeric-delimited word.
    Word(&'static str),
    /// Matches any alphanumeric-delimited word starting with the keyword.
    WordPrefix(&'static str),
}

impl Keyword {
    /// Check `haystack`, which must already be lowercased.
    pub fn matches(&self, haystack: &str) -> bool {
        match self {
            Keyword::Substring(needle) => haystack.contains(needle),
            Keyword::Word(word) => haystack
                .split(|c: char| !c.is_alphanumeric())
                .any(|token| token == *word),
            Keyword::WordPrefix(prefix) => haystack
                .split(|c: char| !c.is_alphanumeric())
                .any(|token| token.starts_with(prefix)),
        }
    }
}

/// An ordered rule: the tag is chosen if any keyword matches.
#[derive(Debug, Clone, Copy)]
pub struct Rule<T: 'static> {
    pub tag: T,
    pub keywords: &'static [Keyword],
}

impl<T: Copy> Rule<T> {
    fn matches(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|k| k.matches(haystack))
    }
}

use Keyword::{Substring, Word, WordPrefix};

/// Level detection rules in priority order.
pub static LEVEL_RULES: &[Rule<EducationLevel>] = &[
    Rule {
        tag: EducationLevel::Piaic,
        keywords: &[Substring("piaic")],
    },
    Rule {
        tag: EducationLevel::Matric,
        keywords: &[Substring("matric"), Substring("10th")],
    },
    Rule {
        tag: EducationLevel::Fsc,
        keywords: &[
            Substring("fsc"),
            Substring("intermediate"),
            Substring("12th"),
        ],
    },
    Rule {
        tag: EducationLevel::Bs,
        keywords: &[WordPrefix("bs"), Substring("bachelor")],
    },
    Rule {
        tag: EducationLevel::Mphil,
        keywords: &[
            Substring("mphil"),
            Substring("master"),
            Substring("thesis"),
        ],
    },
];

static PIAIC_SUBJECTS: &[Rule<Subject>] = &[
    Rule {
        tag: Subject::Ai,
        keywords: &[
            Word("ai"),
            Substring("artificial intelligence"),
            Substring("machine learning"),
        ],
    },
    Rule {
        tag: Subject::Blockchain,
        keywords: &[Substring("blockchain"), Substring("web3")],
    },
    Rule {
        tag: Subject::Cloud,
        keywords: &[Substring("cloud"), Substring("devops")],
    },
];

static MATRIC_SUBJECTS: &[Rule<Subject>] = &[
    Rule {
        tag: Subject::Math,
        keywords: &[Substring("math")],
    },
    Rule {
        tag: Subject::Science,
        keywords: &[
            Substring("science"),
            Substring("physics"),
            Substring("chemistry"),
            Substring("biology"),
        ],
    },
    Rule {
        tag: Subject::English,
        keywords: &[Substring("english")],
    },
];

static FSC_SUBJECTS: &[Rule<Subject>] = &[
    Rule {
        tag: Subject::Physics,
        keywords: &[Substring("physics")],
    },
    Rule {
        tag: Subject::Chemistry,
        keywords: &[Substring("chemistry")],
    },
    Rule {
        tag: Subject::Biology,
        keywords: &[Substring("biology")],
    },
    Rule {
        tag: Subject::Math,
        keywords: &[Substring("math")],
    },
];

static BS_SUBJECTS: &[Rule<Subject>] = &[
    Rule {
        tag: Subject::Cs,
        keywords: &[
            Word("cs"),
            Substring("bscs"),
            Substring("computer science"),
            Substring("programming"),
        ],
    },
    Rule {
        tag: Subject::Engineering,
        keywords: &[Substring("engineering")],
    },
];

static MPHIL_SUBJECTS: &[Rule<Subject>] = &[
    Rule {
        tag: Subject::Research,
        keywords: &[Substring("research")],
    },
    Rule {
        tag: Subject::Thesis,
        keywords: &[Substring("thesis")],
    },
];

/// Subject rules for a level. Empty for [`EducationLevel::General`].
pub fn subject_rules(level: EducationLevel) -> &'static [Rule<Subject>] {
    match level {
        EducationLevel::Piaic => PIAIC_SUBJECTS,
        EducationLevel::Matric => MATRIC_SUBJECTS,
        EducationLevel::Fsc => FSC_SUBJECTS,
        EducationLevel::Bs => BS_SUBJECTS,
        EducationLevel::Mphil => MPHIL_SUBJECTS,
        EducationLevel::General => &[],
    }
}

fn first_match<T: Copy>(rules: &[Rule<T>], haystack: &str) -> Option<T> {
    rules.iter().find(|r| r.matches(haystack)).map(|r| r.tag)
}

/// Classify a query into a level and subject.
///
/// Never fails: unmatched input yields `(General, General)`, and subject
/// detection is skipped entirely when the level is `General`.
pub fn classify(query: &str) -> (EducationLevel, Subject) {
    let haystack = query.to_lowercase();

    let Some(level) = first_match(LEVEL_RULES, &haystack) else {
        return (EducationLevel::General, Subject::General);
    };

    let subject = first_match(subject_rules(level), &haystack).unwrap_or_default();
    (level, subject)
}
