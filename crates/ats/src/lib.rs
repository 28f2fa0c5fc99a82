//! ATS scoring engine for a resume-builder backend.
//!
//! Owns the resume document model, payload validation, the keyword corpus,
//! the deterministic ATS scorer, and the store-backed document lifecycle.
//! HTTP routing, auth, AI text generation, and PDF rendering live in
//! external collaborators that call into this crate.

pub mod corpus;
pub mod errors;
pub mod models;
pub mod scoring;
pub mod service;
pub mod store;
pub mod validation;

pub use corpus::{KeywordCorpus, DEFAULT_CORPUS};
pub use errors::AtsError;
pub use models::resume::{NewResume, ResumeDocument};
pub use models::score::{ScoreBreakdown, ScoreRecord};
pub use scoring::score;
pub use service::{AnalyzeOutcome, ResumeService};
pub use store::{InMemoryResumeStore, ResumeStore};
