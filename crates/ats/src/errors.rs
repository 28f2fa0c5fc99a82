use thiserror::Error;

/// Engine-level error type returned by validation, the store seam, and the
/// document lifecycle service. HTTP collaborators map `NotFound` to 404,
/// `Validation` to 400, and everything else to 500.
#[derive(Debug, Error)]
pub enum AtsError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
