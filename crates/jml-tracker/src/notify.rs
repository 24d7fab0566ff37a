//! Completion workflow delivery.

use async_trait::async_trait;
use jml_core::entities::ProcessRecord;
use jml_core::enums::ProcessKind;

use crate::error::NotifyError;

/// Sink for the one-time "process completed" workflow.
#[async_trait]
pub trait WorkflowNotifier: Send + Sync {
    async fn complete_workflow(
        &self,
        kind: ProcessKind,
        process: &ProcessRecord,
    ) -> Result<(), NotifyError>;
}

/// Records the workflow request in the log and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl WorkflowNotifier for LogNotifier {
    async fn complete_workflow(
        &self,
        kind: ProcessKind,
        process: &ProcessRecord,
    ) -> Result<(), NotifyError> {
        tracing::info!(
            workflow = kind.workflow_name(),
            process_id = process.id,
            employee = %process.employee_name,
            email = %process.employee_email,
            "completion workflow requested"
        );
        Ok(())
    }
}
