//! Education level and subject tags.

use serde::{Deserialize, Serialize};

/// Top-level classification of the user's academic context.
///
/// `General` is the fallback when no level keyword matches; it is never
/// itself a matched keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationLevel {
    Piaic,
    Matric,
    Fsc,
    Bs,
    Mphil,
    #[default]
    General,
}

impl EducationLevel {
    /// All levels, in classifier priority order.
    pub const ALL: [EducationLevel; 6] = [
        EducationLevel::Piaic,
        EducationLevel::Matric,
        EducationLevel::Fsc,
        EducationLevel::Bs,
        EducationLevel::Mphil,
        EducationLevel::General,
    ];

    /// Returns the lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Piaic => "piaic",
            EducationLevel::Matric => "matric",
            EducationLevel::Fsc => "fsc",
            EducationLevel::Bs => "bs",
            EducationLevel::Mphil => "mphil",
            EducationLevel::General => "general",
        }
    }

    /// Human-facing name used in the response record.
    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::Piaic => "PIAIC",
            EducationLevel::Matric => "Matric",
            EducationLevel::Fsc => "FSc",
            EducationLevel::Bs => "BS",
            EducationLevel::Mphil => "MPhil",
            EducationLevel::General => "General",
        }
    }

    pub fn is_general(&self) -> bool {
        matches!(self, EducationLevel::General)
    }
}

impl std::fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Second-level classification, narrowing within an [`EducationLevel`].
///
/// The enum is flat; which subjects are reachable for a given level is
/// decided by that level's rule list in [`super::classifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Ai,
    Blockchain,
    Cloud,
    Math,
    Science,
    English,
    Physics,
    Chemistry,
    Biology,
    Cs,
    Engineering,
    Research,
    Thesis,
    #[default]
    General,
}

impl Subject {
    pub const ALL: [Subject; 14] = [
        Subject::Ai,
        Subject::Blockchain,
        Subject::Cloud,
        Subject::Math,
        Subject::Science,
        Subject::English,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
        Subject::Cs,
        Subject::Engineering,
        Subject::Research,
        Subject::Thesis,
        Subject::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Ai => "ai",
            Subject::Blockchain => "blockchain",
            Subject::Cloud => "cloud",
            Subject::Math => "math",
            Subject::Science => "science",
            Subject::English => "english",
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::Biology => "biology",
            Subject::Cs => "cs",
            Subject::Engineering => "engineering",
            Subject::Research => "research",
            Subject::Thesis => "thesis",
            Subject::General => "general",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Subject::Ai => "AI",
            Subject::Blockchain => "Blockchain",
            Subject::Cloud => "Cloud",
            Subject::Math => "Math",
            Subject::Science => "Science",
            Subject::English => "English",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
            Subject::Cs => "CS",
            Subject::Engineering => "Engineering",
            Subject::Research => "Research",
            Subject::Thesis => "Thesis",
            Subject::General => "General",
        }
    }

    pub fn is_general(&self) -> bool {
        matches!(self, Subject::General)
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_general() {
        assert_eq!(EducationLevel::default(), EducationLevel::General);
        assert_eq!(Subject::default(), Subject::General);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&EducationLevel::Fsc).unwrap();
        assert_eq!(json, "\"fsc\"");
        let json = serde_json::to_string(&Subject::Cs).unwrap();
        assert_eq!(json, "\"cs\"");
    }

    #[test]
    fn test_labels() {
        assert_eq!(EducationLevel::Piaic.label(), "PIAIC");
        assert_eq!(Subject::Ai.label(), "AI");
    }
}
