//! Static study tips keyed by level and subject.

use super::level::{EducationLevel, Subject};

type SubjectTips = &'static [(Subject, &'static str)];

/// Level → (subject → tip). [`EducationLevel::General`] has no entry.
static TIP_TABLE: &[(EducationLevel, SubjectTips)] = &[
    (
        EducationLevel::Piaic,
        &[
            (
                Subject::Ai,
                "Focus on Python fundamentals first, then work through NumPy, Pandas and scikit-learn. Build one small project per module and keep your notebooks on GitHub.",
            ),
            (
                Subject::Blockchain,
                "Understand how hashing, blocks and consensus fit together before writing Solidity. Deploy every contract to a testnet and read other people's audited code.",
            ),
            (
                Subject::Cloud,
                "Practice on a free-tier account: containers with Docker, then orchestration with Kubernetes. Write down every command you run so you can repeat the setup.",
            ),
            (
                Subject::General,
                "Attend every PIAIC class, finish the weekly assignments on time and join the study groups on the official channels. The quarterly exams reward consistent practice.",
            ),
        ],
    ),
    (
        EducationLevel::Matric,
        &[
            (
                Subject::Math,
                "Solve every exercise in the textbook, then the board's past papers from the last five years. Keep a formula sheet and revise it daily.",
            ),
            (
                Subject::Science,
                "Learn the definitions word for word, practice labelled diagrams and memorise the numericals' formulas. Past papers show which chapters repeat.",
            ),
            (
                Subject::English,
                "Read one passage a day for comprehension, practice essay and letter formats, and learn the grammar rules with examples.",
            ),
            (
                Subject::General,
                "Make a timetable that covers every subject each week. Past papers and model papers are the best preparation for board exams.",
            ),
        ],
    ),
    (
        EducationLevel::Fsc,
        &[
            (
                Subject::Physics,
                "Derivations and numericals carry most of the marks. Understand each derivation step by step and solve the chapter-end numericals twice.",
            ),
            (
                Subject::Chemistry,
                "Organic reactions need daily repetition. Make reaction charts, and for inorganic chemistry learn the periodic trends with reasons.",
            ),
            (
                Subject::Biology,
                "Draw and label diagrams repeatedly and learn the terminology exactly. Biology is the largest MDCAT section, so prepare the textbook line by line.",
            ),
            (
                Subject::Math,
                "Practice calculus every day and do every solved example before the exercises. Keep a list of the questions you got wrong and revisit them.",
            ),
            (
                Subject::General,
                "Balance board preparation with entry test preparation (MDCAT or ECAT). Consistent revision of the first-year syllabus saves time later.",
            ),
        ],
    ),
    (
        EducationLevel::Bs,
        &[
            (
                Subject::Cs,
                "Write code every day. Master data structures and algorithms, build projects outside coursework, and keep a clean GitHub profile for internships.",
            ),
            (
                Subject::Engineering,
                "Keep up with lab work and reports, understand the mathematics behind each course, and start your final year project idea early.",
            ),
            (
                Subject::General,
                "Keep your CGPA steady from the first semester, use office hours, and look for internships after the second year.",
            ),
        ],
    ),
    (
        EducationLevel::Mphil,
        &[
            (
                Subject::Research,
                "Read recent papers in your area every week, keep an annotated bibliography, and discuss your research questions with your supervisor early.",
            ),
            (
                Subject::Thesis,
                "Agree on the thesis structure with your supervisor first, write a little every day, and use a reference manager from the start.",
            ),
            (
                Subject::General,
                "Choose your supervisor and research area carefully, complete coursework with good grades, and aim for at least one publication.",
            ),
        ],
    ),
];

/// Look up the tip for a level and subject.
///
/// Falls back to the level's `General` tip when the subject has no entry,
/// and to the empty string when the level itself has no entry (only
/// [`EducationLevel::General`]).
pub fn resolve(level: EducationLevel, subject: Subject) -> &'static str {
    let Some((_, tips)) = TIP_TABLE.iter().find(|(l, _)| *l == level) else {
        return "";
    };

    let lookup = |wanted: Subject| {
        tips.iter()
            .find(|(s, _)| *s == wanted)
            .map(|(_, tip)| *tip)
    };

    lookup(subject)
        .or_else(|| lookup(Subject::General))
        .unwrap_or_default()
}
