use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ProcessKind, ProcessStatus};
use crate::ids::ItemId;
use crate::progress::ProgressSnapshot;

/// Header entity for one onboarding, transfer, or offboarding case.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProcessRecord {
    pub id: ItemId,
    pub kind: ProcessKind,
    pub title: String,
    pub employee_name: String,
    pub employee_email: String,
    pub department: Option<String>,
    /// Start date, effective date, or last working date depending on `kind`.
    pub key_date: NaiveDate,
    pub status: ProcessStatus,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    /// Rounded, 0 to 100.
    pub completion_percentage: u8,
    pub completed_date: Option<DateTime<Utc>>,
    /// Set once the completion workflow has been delivered.
    pub completion_notified_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    /// Optimistic concurrency token, bumped on every write.
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProcessRecord {
    /// The stored counters as a snapshot.
    #[must_use]
    pub const fn progress(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            total_tasks: self.total_tasks,
            completed_tasks: self.completed_tasks,
            completion_percentage: self.completion_percentage,
        }
    }

    /// The reached-100% condition checked before sending a completion workflow.
    #[must_use]
    pub fn is_marked_complete(&self) -> bool {
        self.completion_percentage == 100 && self.status == ProcessStatus::Completed
    }
}

/// Creation payload for a process record. Counters start at zero.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewProcess {
    pub title: String,
    pub employee_name: String,
    pub employee_email: String,
    pub department: Option<String>,
    pub key_date: NaiveDate,
    pub notes: Option<String>,
}
