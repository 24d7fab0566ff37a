//! Completion arithmetic shared by every process kind.
//!
//! The counters on a process record are always derived from scratch from the
//! full task collection, never adjusted incrementally.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TaskStatus;

/// Percentage of completed tasks, rounded half away from zero.
///
/// Returns `0` for an empty collection. Uses integer arithmetic so every
/// process kind rounds identically: `1/3 → 33`, `2/3 → 67`, `1/8 → 13`.
#[must_use]
pub fn completion_percentage(completed: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = u64::from(completed.min(total));
    let total = u64::from(total);
    let rounded = (200 * completed + total) / (2 * total);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

/// Derived progress counters for one process record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProgressSnapshot {
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub completion_percentage: u8,
}

impl ProgressSnapshot {
    /// Count a task collection by status.
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = TaskStatus>,
    {
        let (total, completed) = statuses
            .into_iter()
            .fold((0u32, 0u32), |(total, completed), status| {
                (
                    total.saturating_add(1),
                    completed.saturating_add(u32::from(status.is_completed())),
                )
            });
        Self::new(total, completed)
    }

    #[must_use]
    pub fn new(total_tasks: u32, completed_tasks: u32) -> Self {
        let completed_tasks = completed_tasks.min(total_tasks);
        Self {
            total_tasks,
            completed_tasks,
            completion_percentage: completion_percentage(completed_tasks, total_tasks),
        }
    }

    /// Every task is completed and there is at least one task.
    ///
    /// Gated on the counts rather than the rounded percentage: with 200 or
    /// more tasks a single outstanding one still rounds to 100%.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.total_tasks > 0 && self.completed_tasks == self.total_tasks
    }
}
