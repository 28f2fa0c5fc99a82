use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-category scores, each in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub keywords: u32,
    pub formatting: u32,
    pub sections: u32,
    pub experience: u32,
    pub skills: u32,
}

/// The persisted output of one scoring run, attached to the document as its
/// `atsScore`. `overall` is derived from the breakdown by the fixed category
/// weights and is never set independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub overall: u32,
    pub breakdown: ScoreBreakdown,
    pub suggestions: Vec<String>,
    pub last_analyzed: DateTime<Utc>,
}
