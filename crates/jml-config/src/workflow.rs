//! Completion workflow sink configuration.

use serde::{Deserialize, Serialize};

/// Where completion workflows are delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowSink {
    /// Write a row to the `workflow_outbox` table for an external runner.
    #[default]
    Outbox,
    /// Log the workflow request only.
    Log,
    /// Never notify. Completion checks still report `was_completed`.
    Disabled,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WorkflowConfig {
    #[serde(default)]
    pub sink: WorkflowSink,
}
