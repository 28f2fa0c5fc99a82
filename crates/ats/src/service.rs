//! Document lifecycle service: create, read, update, delete, and on-demand
//! ATS analysis. This is the surface HTTP collaborators call; they own the
//! status-code mapping (`NotFound` → 404, `Validation` → 400, rest → 500).

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::corpus::{KeywordCorpus, DEFAULT_CORPUS};
use crate::errors::AtsError;
use crate::models::resume::{NewResume, ResumeDocument, ResumeStatus};
use crate::models::score::ScoreRecord;
use crate::scoring::score;
use crate::store::ResumeStore;
use crate::validation::validate_resume;

const DEFAULT_PAGE_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub current: usize,
    pub pages: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumePage {
    pub resumes: Vec<ResumeDocument>,
    pub pagination: Pagination,
}

/// Response body of a completed analysis.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeOutcome {
    pub message: String,
    pub ats_score: ScoreRecord,
}

pub struct ResumeService {
    store: Arc<dyn ResumeStore>,
    corpus: KeywordCorpus,
}

impl ResumeService {
    pub fn new(store: Arc<dyn ResumeStore>) -> Self {
        Self {
            store,
            corpus: DEFAULT_CORPUS,
        }
    }

    /// First save: validates the payload and stores a fresh draft document.
    pub async fn create(&self, user_id: Uuid, payload: NewResume) -> Result<ResumeDocument, AtsError> {
        validate_resume(&payload)?;

        let now = Utc::now();
        let document = ResumeDocument {
            id: Uuid::new_v4(),
            user_id,
            title: payload.title,
            personal_info: payload.personal_info,
            experience: payload.experience,
            education: payload.education,
            skills: payload.skills,
            template: payload.template,
            status: ResumeStatus::Draft,
            ats_score: None,
            created_at: now,
            updated_at: now,
        };

        self.store.insert(document.clone()).await?;
        info!(resume_id = %document.id, "resume created");
        Ok(document)
    }

    pub async fn get(&self, user_id: Uuid, id: Uuid) -> Result<ResumeDocument, AtsError> {
        self.store
            .fetch(user_id, id)
            .await?
            .ok_or_else(|| AtsError::NotFound(format!("Resume {id} not found")))
    }

    /// Lists the user's documents, newest first. `page` is 1-based; zero is
    /// treated as the first page.
    pub async fn list(
        &self,
        user_id: Uuid,
        page: Option<usize>,
        limit: Option<usize>,
    ) -> Result<ResumePage, AtsError> {
        let page = page.unwrap_or(1).max(1);
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(1);
        let offset = (page - 1) * limit;

        let (resumes, total) = self.store.list(user_id, offset, limit).await?;
        Ok(ResumePage {
            resumes,
            pagination: Pagination {
                current: page,
                pages: total.div_ceil(limit),
                total,
            },
        })
    }

    /// Replaces the user-editable fields; `createdAt`, `status`, and the
    /// last analysis survive the edit.
    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        payload: NewResume,
    ) -> Result<ResumeDocument, AtsError> {
        validate_resume(&payload)?;

        let mut document = self.get(user_id, id).await?;
        document.title = payload.title;
        document.personal_info = payload.personal_info;
        document.experience = payload.experience;
        document.education = payload.education;
        document.skills = payload.skills;
        document.template = payload.template;
        document.updated_at = Utc::now();

        if !self.store.update(document.clone()).await? {
            return Err(AtsError::NotFound(format!("Resume {id} not found")));
        }
        Ok(document)
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), AtsError> {
        if !self.store.delete(user_id, id).await? {
            return Err(AtsError::NotFound(format!("Resume {id} not found")));
        }
        info!(resume_id = %id, "resume deleted");
        Ok(())
    }

    /// Runs the scorer over the stored document and persists the record as
    /// its new `atsScore`, replacing any prior analysis.
    pub async fn analyze(&self, user_id: Uuid, id: Uuid) -> Result<AnalyzeOutcome, AtsError> {
        let document = self.get(user_id, id).await?;
        let record = score(&document, &self.corpus);

        // The document can disappear between fetch and save; treat that the
        // same as an unknown id.
        if !self.store.save_score(user_id, id, record.clone()).await? {
            return Err(AtsError::NotFound(format!("Resume {id} not found")));
        }

        info!(
            resume_id = %id,
            overall = record.overall,
            suggestions = record.suggestions.len(),
            "ATS analysis completed"
        );
        Ok(AnalyzeOutcome {
            message: "ATS analysis completed".to_string(),
            ats_score: record,
        })
    }
}
