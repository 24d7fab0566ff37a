//! Response types returned by tracker operations and printed by `jml`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ProcessTask;
use crate::enums::{ProcessKind, ProcessStatus};
use crate::ids::ItemId;
use crate::progress::ProgressSnapshot;

/// Result of recounting one process record's tasks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecalculationOutcome {
    pub process_id: ItemId,
    pub process_type: ProcessKind,
    pub progress: ProgressSnapshot,
    /// Status after the write.
    pub status: ProcessStatus,
    /// This call moved the status to `completed`.
    pub transitioned_to_completed: bool,
    /// Write attempts used, including retries after version conflicts.
    pub attempts: u32,
}

/// Result of the completion transition check.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompletionCheck {
    pub process_id: ItemId,
    pub process_type: ProcessKind,
    pub employee_name: Option<String>,
    pub was_completed: bool,
    pub notification_sent: bool,
    /// The workflow had already been delivered by an earlier check.
    pub already_notified: bool,
}

impl CompletionCheck {
    /// The process could not be read or is not at 100%.
    #[must_use]
    pub const fn not_completed(
        process_id: ItemId,
        process_type: ProcessKind,
        employee_name: Option<String>,
    ) -> Self {
        Self {
            process_id,
            process_type,
            employee_name,
            was_completed: false,
            notification_sent: false,
            already_notified: false,
        }
    }
}

/// Result of a user changing one task's status.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskStatusOutcome {
    pub task: ProcessTask,
    /// `None` when the recalculation failed; counters are then stale.
    pub recalculation: Option<RecalculationOutcome>,
    pub completion: CompletionCheck,
}
