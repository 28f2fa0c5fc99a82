//! ATS scorer — pure, deterministic scoring of a resume document against the
//! keyword corpus. No I/O, no randomness: identical input always yields an
//! identical breakdown.
//!
//! Five categories combined by fixed weights: keywords 30%, formatting 20%,
//! sections 20%, experience 20%, skills 10%. Term detection is plain
//! case-insensitive substring search — deliberately not tokenized or
//! stemmed, so "Java" also hits inside "JavaScript".

use chrono::Utc;
use serde_json::Value;

use crate::corpus::KeywordCorpus;
use crate::models::resume::{PersonalInfo, ResumeDocument};
use crate::models::score::{ScoreBreakdown, ScoreRecord};

/// Fixed category weights. Must sum to 1.0.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub keywords: f64,
    pub formatting: f64,
    pub sections: f64,
    pub experience: f64,
    pub skills: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keywords: 0.30,
            formatting: 0.20,
            sections: 0.20,
            experience: 0.20,
            skills: 0.10,
        }
    }
}

/// Scores a document against the corpus and returns the full record,
/// stamped with the computation time. The caller persists the record onto
/// the document; the scorer itself mutates nothing.
pub fn score(document: &ResumeDocument, corpus: &KeywordCorpus) -> ScoreRecord {
    let weights = ScoringWeights::default();
    let mut suggestions = Vec::new();

    let keywords = score_keywords(document, corpus);
    if keywords < 30 {
        suggestions
            .push("Add more industry-relevant keywords to improve ATS compatibility".to_string());
    }

    let formatting = score_formatting(&document.personal_info, &mut suggestions);

    let sections = score_sections(document);
    if sections < 100 {
        suggestions.push(
            "Complete all resume sections (Contact, Experience, Education, Skills)".to_string(),
        );
    }

    let experience = score_experience(document, corpus, &mut suggestions);

    let skills = (document.skills.total() as u32 * 10).min(100);
    if skills < 50 {
        suggestions.push("Add more relevant technical and soft skills".to_string());
    }

    let breakdown = ScoreBreakdown {
        keywords,
        formatting,
        sections,
        experience,
        skills,
    };

    ScoreRecord {
        overall: combine(&breakdown, &weights),
        breakdown,
        suggestions,
        last_analyzed: Utc::now(),
    }
}

/// Weighted combination of the category scores, rounded to the nearest
/// integer. Guaranteed in 0..=100 when every category is.
pub fn combine(breakdown: &ScoreBreakdown, weights: &ScoringWeights) -> u32 {
    (breakdown.keywords as f64 * weights.keywords
        + breakdown.formatting as f64 * weights.formatting
        + breakdown.sections as f64 * weights.sections
        + breakdown.experience as f64 * weights.experience
        + breakdown.skills as f64 * weights.skills)
        .round() as u32
}

/// Keywords (30%): fraction of corpus terms found anywhere in the
/// serialized document text.
fn score_keywords(document: &ResumeDocument, corpus: &KeywordCorpus) -> u32 {
    let total = corpus.total_terms();
    if total == 0 {
        return 0;
    }

    let blob = document_blob(document);
    let matches = corpus
        .all_terms()
        .filter(|term| blob.contains(&term.to_lowercase()))
        .count();

    ((matches as f64 / total as f64) * 100.0).round() as u32
}

/// Lower-cased JSON rendering of the whole document, with any prior
/// analysis stripped out so re-scoring an unchanged document is stable.
fn document_blob(document: &ResumeDocument) -> String {
    let mut value = serde_json::to_value(document).unwrap_or(Value::Null);
    if let Some(obj) = value.as_object_mut() {
        obj.remove("atsScore");
    }
    value.to_string().to_lowercase()
}

/// Formatting (20%): base 85 for clean structured data, with deductions for
/// missing contact fields. Saturating, so stacked deductions floor at 0
/// rather than going negative.
fn score_formatting(info: &PersonalInfo, suggestions: &mut Vec<String>) -> u32 {
    let mut score: u32 = 85;

    if !info.has_phone() {
        score = score.saturating_sub(10);
        suggestions.push("Add phone number for better contact information".to_string());
    }

    if !info.has_location() {
        score = score.saturating_sub(5);
        suggestions.push("Include location information".to_string());
    }

    score
}

/// Sections (20%): 25 points per present-and-non-empty required section.
/// Personal info is structurally required on every document, so its 25
/// points are always awarded.
fn score_sections(document: &ResumeDocument) -> u32 {
    let mut score = 25;

    if !document.experience.is_empty() {
        score += 25;
    }
    if !document.education.is_empty() {
        score += 25;
    }
    if !document.skills.is_empty() {
        score += 25;
    }

    score
}

/// Experience (20%): per entry, +20 for a substantial description (> 50
/// chars), +10 for a digit (quantified impact), +20 for an action verb from
/// the corpus. Summed across all entries, capped at 100.
fn score_experience(
    document: &ResumeDocument,
    corpus: &KeywordCorpus,
    suggestions: &mut Vec<String>,
) -> u32 {
    if document.experience.is_empty() {
        suggestions.push("Add work experience with quantifiable achievements".to_string());
        return 0;
    }

    let mut score: u32 = 0;
    for entry in &document.experience {
        let description = &entry.description;
        let description_lower = description.to_lowercase();

        if description.chars().count() > 50 {
            score += 20;
        }
        if description.chars().any(|c| c.is_ascii_digit()) {
            score += 10;
        }
        if corpus
            .action
            .iter()
            .any(|verb| description_lower.contains(&verb.to_lowercase()))
        {
            score += 20;
        }
    }

    score.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::DEFAULT_CORPUS;
    use crate::models::resume::{
        EducationEntry, ExperienceEntry, ResumeStatus, Skills, Template,
    };
    use chrono::TimeZone;
    use uuid::Uuid;

    fn make_document() -> ResumeDocument {
        let created = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();
        ResumeDocument {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Backend Engineer".to_string(),
            personal_info: PersonalInfo {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                ..Default::default()
            },
            experience: vec![],
            education: vec![],
            skills: Skills::default(),
            template: Template::default(),
            status: ResumeStatus::default(),
            ats_score: None,
            created_at: created,
            updated_at: created,
        }
    }

    fn rich_experience_entry() -> ExperienceEntry {
        ExperienceEntry {
            company: "Initech".to_string(),
            position: "Senior Engineer".to_string(),
            start_date: "2020-01".to_string(),
            end_date: None,
            description: "Led a team of 6 engineers and reduced p99 latency by 40% \
                          across the payments platform"
                .to_string(),
            location: None,
            is_current_job: true,
        }
    }

    #[test]
    fn test_score_is_deterministic() {
        let doc = make_document();
        let a = score(&doc, &DEFAULT_CORPUS);
        let b = score(&doc, &DEFAULT_CORPUS);
        assert_eq!(a.breakdown, b.breakdown);
        assert_eq!(a.overall, b.overall);
        assert_eq!(a.suggestions, b.suggestions);
    }

    #[test]
    fn test_overall_respects_weight_invariant() {
        let mut doc = make_document();
        doc.experience.push(rich_experience_entry());
        doc.skills.technical = vec!["React".to_string(), "Docker".to_string()];
        let record = score(&doc, &DEFAULT_CORPUS);

        let b = record.breakdown;
        let expected = (b.keywords as f64 * 0.30
            + b.formatting as f64 * 0.20
            + b.sections as f64 * 0.20
            + b.experience as f64 * 0.20
            + b.skills as f64 * 0.10)
            .round() as u32;
        assert_eq!(record.overall, expected);
    }

    #[test]
    fn test_all_scores_within_bounds() {
        let mut doc = make_document();
        for _ in 0..8 {
            doc.experience.push(rich_experience_entry());
        }
        doc.skills.technical = (0..30).map(|i| format!("Skill{i}")).collect();
        let record = score(&doc, &DEFAULT_CORPUS);

        let b = record.breakdown;
        for category in [b.keywords, b.formatting, b.sections, b.experience, b.skills] {
            assert!(category <= 100, "category out of bounds: {category}");
        }
        assert!(record.overall <= 100);
    }

    #[test]
    fn test_empty_document_floor() {
        let doc = make_document();
        let record = score(&doc, &DEFAULT_CORPUS);

        // Only personal info present among the four required sections.
        assert_eq!(record.breakdown.sections, 25);
        assert_eq!(record.breakdown.experience, 0);
        assert_eq!(record.breakdown.skills, 0);
        assert!(record
            .suggestions
            .iter()
            .any(|s| s.contains("work experience")));
        assert!(record
            .suggestions
            .iter()
            .any(|s| s.contains("technical and soft skills")));
    }

    #[test]
    fn test_keyword_in_summary_strictly_increases_score() {
        let base = make_document();
        let mut enriched = base.clone();
        enriched.personal_info.summary = Some("Kubernetes platform work".to_string());

        let before = score(&base, &DEFAULT_CORPUS).breakdown.keywords;
        let after = score(&enriched, &DEFAULT_CORPUS).breakdown.keywords;
        assert!(after > before, "expected {after} > {before}");
    }

    #[test]
    fn test_experience_points_capped_at_100() {
        let mut doc = make_document();
        // Five max-value entries would sum to 250 uncapped.
        for _ in 0..5 {
            doc.experience.push(rich_experience_entry());
        }
        let record = score(&doc, &DEFAULT_CORPUS);
        assert_eq!(record.breakdown.experience, 100);
    }

    #[test]
    fn test_experience_partial_credit_per_entry() {
        let mut doc = make_document();
        doc.experience.push(ExperienceEntry {
            company: "Initech".to_string(),
            position: "Engineer".to_string(),
            start_date: "2021-03".to_string(),
            end_date: Some("2022-03".to_string()),
            // Short, no digits, no action verb: zero points.
            description: "wrote some code".to_string(),
            location: None,
            is_current_job: false,
        });
        let record = score(&doc, &DEFAULT_CORPUS);
        assert_eq!(record.breakdown.experience, 0);
        // Non-empty experience still counts as a present section.
        assert_eq!(record.breakdown.sections, 50);
    }

    #[test]
    fn test_formatting_deductions() {
        let mut suggestions = Vec::new();
        let info = PersonalInfo {
            full_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(score_formatting(&info, &mut suggestions), 70);
        assert_eq!(suggestions.len(), 2);

        let complete = PersonalInfo {
            phone: Some("+1 555 0100".to_string()),
            location: Some("Berlin".to_string()),
            ..info
        };
        let mut none = Vec::new();
        assert_eq!(score_formatting(&complete, &mut none), 85);
        assert!(none.is_empty());
    }

    #[test]
    fn test_all_sections_present_scores_100() {
        let mut doc = make_document();
        doc.experience.push(rich_experience_entry());
        doc.education.push(EducationEntry {
            school: "MIT".to_string(),
            degree: "BSc Computer Science".to_string(),
            graduation_date: "2019".to_string(),
            field_of_study: None,
            gpa: None,
            location: None,
        });
        doc.skills.technical = vec!["Python".to_string()];
        let record = score(&doc, &DEFAULT_CORPUS);
        assert_eq!(record.breakdown.sections, 100);
        assert!(!record
            .suggestions
            .iter()
            .any(|s| s.contains("Complete all resume sections")));
    }

    #[test]
    fn test_rescoring_analyzed_document_is_stable() {
        let mut doc = make_document();
        doc.skills.technical = vec!["React".to_string()];
        let first = score(&doc, &DEFAULT_CORPUS);

        doc.ats_score = Some(first.clone());
        let second = score(&doc, &DEFAULT_CORPUS);
        assert_eq!(first.breakdown, second.breakdown);
        assert_eq!(first.overall, second.overall);
    }

    #[test]
    fn test_calibration_scenario() {
        let mut doc = make_document();
        doc.personal_info.full_name = "A".to_string();
        doc.personal_info.email = "a@b.com".to_string();
        doc.skills.technical = vec!["React".to_string(), "Node.js".to_string()];

        let record = score(&doc, &DEFAULT_CORPUS);
        let b = record.breakdown;

        assert_eq!(b.formatting, 70); // 85 - 10 (phone) - 5 (location)
        assert_eq!(b.skills, 20); // 2 terms x 10
        assert_eq!(b.experience, 0);
        assert_eq!(b.sections, 50); // personal info + skills
        assert!(b.keywords > 0, "React and Node.js should match the corpus");

        let expected = (b.keywords as f64 * 0.30 + 70.0 * 0.20 + 50.0 * 0.20 + 0.0 * 0.20
            + 20.0 * 0.10)
            .round() as u32;
        assert_eq!(record.overall, expected);

        let has = |needle: &str| record.suggestions.iter().any(|s| s.contains(needle));
        assert!(has("phone number"));
        assert!(has("location"));
        assert!(has("work experience"));
        assert!(has("Complete all resume sections"));
    }

    #[test]
    fn test_suggestion_order_matches_emission_order() {
        let doc = make_document();
        let record = score(&doc, &DEFAULT_CORPUS);
        let position = |needle: &str| {
            record
                .suggestions
                .iter()
                .position(|s| s.contains(needle))
                .unwrap_or_else(|| panic!("missing suggestion: {needle}"))
        };
        assert!(position("phone number") < position("location"));
        assert!(position("location") < position("Complete all resume sections"));
        assert!(position("Complete all resume sections") < position("work experience"));
        assert!(position("work experience") < position("technical and soft skills"));
    }

    #[test]
    fn test_substring_matching_is_not_tokenized() {
        let mut doc = make_document();
        // "Java" matches inside "JavaScript" by design.
        doc.personal_info.summary = Some("Ten years of JavaScript".to_string());
        let with_js = score(&doc, &DEFAULT_CORPUS).breakdown.keywords;
        doc.personal_info.summary = None;
        let without = score(&doc, &DEFAULT_CORPUS).breakdown.keywords;
        // JavaScript alone trips both "JavaScript" and "Java".
        assert!(with_js >= without + 3);
    }
}
