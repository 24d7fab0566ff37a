//! Completion workflow delivery through the `workflow_outbox` table.

use std::sync::Arc;

use async_trait::async_trait;
use jml_core::entities::ProcessRecord;
use jml_core::enums::ProcessKind;
use jml_tracker::{NotifyError, WorkflowNotifier};
use tracing::info;

use crate::service::JmlService;

/// Delivers a workflow by queueing it in the outbox.
pub struct OutboxNotifier {
    service: Arc<JmlService>,
}

impl OutboxNotifier {
    #[must_use]
    pub const fn new(service: Arc<JmlService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl WorkflowNotifier for OutboxNotifier {
    async fn complete_workflow(
        &self,
        kind: ProcessKind,
        process: &ProcessRecord,
    ) -> Result<(), NotifyError> {
        let entry = self
            .service
            .enqueue_workflow(kind, process)
            .await
            .map_err(|e| NotifyError::Unavailable(e.to_string()))?;
        info!(
            %kind,
            process_id = process.id,
            outbox_id = entry.id,
            workflow = %entry.workflow,
            "completion workflow queued"
        );
        Ok(())
    }
}
