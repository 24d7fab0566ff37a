use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ProcessKind;
use crate::ids::ItemId;

/// A completion workflow request waiting for the external workflow runner.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WorkflowOutboxEntry {
    pub id: ItemId,
    pub kind: ProcessKind,
    pub process_id: ItemId,
    /// e.g. `complete-onboarding-workflow`.
    pub workflow: String,
    pub employee_name: String,
    pub employee_email: String,
    pub created_at: DateTime<Utc>,
}
