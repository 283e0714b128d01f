//! Error types for Trellis Core

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur when handling Trellis records
#[derive(Debug, Error)]
pub enum TrellisError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
