use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{TaskPriority, TaskStatus};
use crate::ids::ItemId;

/// A checklist item belonging to exactly one process record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProcessTask {
    pub id: ItemId,
    pub process_id: ItemId,
    pub title: String,
    pub category: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
    /// Present exactly when `status` is `Completed`.
    pub completed_date: Option<DateTime<Utc>>,
    pub sort_order: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation payload for a task. New tasks start `Pending`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewTask {
    pub process_id: ItemId,
    pub title: String,
    pub category: Option<String>,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
    pub sort_order: i32,
    pub notes: Option<String>,
}

impl NewTask {
    /// A medium-priority task with only a title, ordered by `sort_order`.
    #[must_use]
    pub fn titled(process_id: ItemId, title: impl Into<String>, sort_order: i32) -> Self {
        Self {
            process_id,
            title: title.into(),
            category: None,
            priority: TaskPriority::default(),
            due_date: None,
            sort_order,
            notes: None,
        }
    }
}
