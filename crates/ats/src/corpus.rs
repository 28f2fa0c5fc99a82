//! Keyword corpus — fixed reference lists of technical terms, soft-skill
//! terms, and action verbs used as ATS scoring signals.
//!
//! Shared read-only data, constructed once and never mutated. Matching
//! against the corpus is plain case-insensitive substring search.

/// Technical terms recruiters' filters commonly look for.
const TECHNICAL_TERMS: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "React",
    "Node.js",
    "SQL",
    "AWS",
    "Docker",
    "Kubernetes",
    "Git",
    "API",
    "REST",
    "GraphQL",
    "MongoDB",
    "PostgreSQL",
    "TypeScript",
    "Vue.js",
    "Angular",
    "Express",
    "Django",
    "Flask",
    "Spring",
    "Machine Learning",
    "Data Analysis",
    "Cloud Computing",
    "DevOps",
    "CI/CD",
];

const SOFT_TERMS: &[&str] = &[
    "Leadership",
    "Communication",
    "Problem Solving",
    "Team Collaboration",
    "Project Management",
    "Critical Thinking",
    "Adaptability",
    "Time Management",
    "Analytical Skills",
    "Customer Service",
    "Presentation Skills",
    "Negotiation",
];

/// Action verbs that signal ownership and measurable impact in experience
/// descriptions.
const ACTION_VERBS: &[&str] = &[
    "Achieved",
    "Implemented",
    "Developed",
    "Led",
    "Managed",
    "Created",
    "Improved",
    "Increased",
    "Reduced",
    "Optimized",
    "Designed",
    "Built",
    "Delivered",
    "Launched",
];

/// The three categorized term lists the scorer draws signals from.
#[derive(Debug, Clone, Copy)]
pub struct KeywordCorpus {
    pub technical: &'static [&'static str],
    pub soft: &'static [&'static str],
    pub action: &'static [&'static str],
}

/// The built-in corpus. Process-wide constant; per-request reloads or
/// runtime configuration are deliberately unsupported.
pub const DEFAULT_CORPUS: KeywordCorpus = KeywordCorpus {
    technical: TECHNICAL_TERMS,
    soft: SOFT_TERMS,
    action: ACTION_VERBS,
};

impl KeywordCorpus {
    /// Iterates every term across all three categories.
    pub fn all_terms(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.technical
            .iter()
            .chain(self.soft.iter())
            .chain(self.action.iter())
            .copied()
    }

    pub fn total_terms(&self) -> usize {
        self.technical.len() + self.soft.len() + self.action.len()
    }
}
