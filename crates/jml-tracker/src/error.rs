//! Error types for the tracker and its collaborators.

use jml_core::enums::ProcessKind;
use jml_core::errors::CoreError;
use jml_core::ids::ItemId;
use thiserror::Error;

/// Failure reported by a `ProcessStore`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The addressed item does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: ItemId },

    /// A version-guarded write lost against a concurrent writer.
    #[error("process {id} was modified concurrently (expected version {expected})")]
    Conflict { id: ItemId, expected: i64 },

    /// Transport or backend failure.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Failure reported by a `WorkflowNotifier`.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("workflow '{workflow}' rejected: {reason}")]
    Rejected { workflow: String, reason: String },

    #[error("workflow sink unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by the fallible tracker entry points.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error("{kind} process {id} not found")]
    ProcessNotFound { kind: ProcessKind, id: ItemId },

    #[error("{kind} task {id} not found")]
    TaskNotFound { kind: ProcessKind, id: ItemId },

    #[error("{kind} process {id} still conflicting after {attempts} attempts")]
    ConflictExhausted {
        kind: ProcessKind,
        id: ItemId,
        attempts: u32,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}
