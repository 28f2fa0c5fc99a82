//! Persistence seam for resume documents.
//!
//! `ResumeStore` is the boundary a real deployment fills with its database
//! adapter; `InMemoryResumeStore` is the reference implementation used by
//! tests and embedders. Every operation is scoped to the owning user, so a
//! document is invisible to anyone but its owner.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AtsError;
use crate::models::resume::ResumeDocument;
use crate::models::score::ScoreRecord;

#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn insert(&self, document: ResumeDocument) -> Result<(), AtsError>;

    async fn fetch(&self, user_id: Uuid, id: Uuid) -> Result<Option<ResumeDocument>, AtsError>;

    /// Returns one page of the user's documents, newest `updatedAt` first,
    /// plus the total count across all pages.
    async fn list(
        &self,
        user_id: Uuid,
        offset: usize,
        limit: usize,
    ) -> Result<(Vec<ResumeDocument>, usize), AtsError>;

    /// Replaces the stored document. Returns false when no document with
    /// this id exists for this user.
    async fn update(&self, document: ResumeDocument) -> Result<bool, AtsError>;

    async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<bool, AtsError>;

    /// Overwrites the document's `atsScore` in place. Last write wins; a
    /// stale overwrite from a concurrent analysis is acceptable.
    async fn save_score(
        &self,
        user_id: Uuid,
        id: Uuid,
        record: ScoreRecord,
    ) -> Result<bool, AtsError>;
}

/// Reference store backed by a `HashMap` behind an async lock.
#[derive(Default)]
pub struct InMemoryResumeStore {
    documents: RwLock<HashMap<Uuid, ResumeDocument>>,
}

impl InMemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResumeStore for InMemoryResumeStore {
    async fn insert(&self, document: ResumeDocument) -> Result<(), AtsError> {
        let mut documents = self.documents.write().await;
        if documents.contains_key(&document.id) {
            return Err(AtsError::Store(format!(
                "document {} already exists",
                document.id
            )));
        }
        documents.insert(document.id, document);
        Ok(())
    }

    async fn fetch(&self, user_id: Uuid, id: Uuid) -> Result<Option<ResumeDocument>, AtsError> {
        let documents = self.documents.read().await;
        Ok(documents
            .get(&id)
            .filter(|d| d.user_id == user_id)
            .cloned())
    }

    async fn list(
        &self,
        user_id: Uuid,
        offset: usize,
        limit: usize,
    ) -> Result<(Vec<ResumeDocument>, usize), AtsError> {
        let documents = self.documents.read().await;
        let mut owned: Vec<ResumeDocument> = documents
            .values()
            .filter(|d| d.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        let total = owned.len();
        let page = owned.into_iter().skip(offset).take(limit).collect();
        Ok((page, total))
    }

    async fn update(&self, document: ResumeDocument) -> Result<bool, AtsError> {
        let mut documents = self.documents.write().await;
        match documents.get_mut(&document.id) {
            Some(existing) if existing.user_id == document.user_id => {
                *existing = document;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<bool, AtsError> {
        let mut documents = self.documents.write().await;
        match documents.get(&id) {
            Some(existing) if existing.user_id == user_id => {
                documents.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn save_score(
        &self,
        user_id: Uuid,
        id: Uuid,
        record: ScoreRecord,
    ) -> Result<bool, AtsError> {
        let mut documents = self.documents.write().await;
        match documents.get_mut(&id) {
            Some(existing) if existing.user_id == user_id => {
                existing.ats_score = Some(record);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
