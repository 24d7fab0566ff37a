//! Cross-cutting error types for JML.
//!
//! Domain-specific errors (`DatabaseError`, `TrackerError`) live in their
//! respective crates. The binary converges them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any JML crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, range, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
