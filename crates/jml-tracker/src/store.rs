//! Storage capability implemented once per process kind.

use std::sync::Arc;

use async_trait::async_trait;
use jml_core::entities::{ProcessRecord, ProcessTask};
use jml_core::enums::ProcessKind;
use jml_core::ids::ItemId;
use jml_core::updates::process::ProcessUpdate;
use jml_core::updates::task::TaskUpdate;

use crate::error::StoreError;

/// Access to one kind's process list and task list.
///
/// Every call is an independent round trip; there is no transaction spanning
/// calls. `update_process` is the single atomic unit the tracker relies on.
#[async_trait]
pub trait ProcessStore: Send + Sync {
    /// The process kind this store reads and writes.
    fn kind(&self) -> ProcessKind;

    /// All tasks of a process, ordered by sort order then id. Unpaginated.
    async fn list_tasks(&self, process_id: ItemId) -> Result<Vec<ProcessTask>, StoreError>;

    /// `Ok(None)` when the process does not exist.
    async fn get_process(&self, id: ItemId) -> Result<Option<ProcessRecord>, StoreError>;

    /// Apply a partial update and return the stored record.
    ///
    /// When `update.expected_version` is set and differs from the stored
    /// version the write must not happen and `StoreError::Conflict` is
    /// returned. Every successful write bumps the version.
    async fn update_process(
        &self,
        id: ItemId,
        update: &ProcessUpdate,
    ) -> Result<ProcessRecord, StoreError>;

    /// `Ok(None)` when the task does not exist.
    async fn get_task(&self, id: ItemId) -> Result<Option<ProcessTask>, StoreError>;

    async fn update_task(&self, id: ItemId, update: &TaskUpdate)
    -> Result<ProcessTask, StoreError>;
}

#[async_trait]
impl<S: ProcessStore + ?Sized> ProcessStore for Arc<S> {
    fn kind(&self) -> ProcessKind {
        (**self).kind()
    }

    async fn list_tasks(&self, process_id: ItemId) -> Result<Vec<ProcessTask>, StoreError> {
        (**self).list_tasks(process_id).await
    }

    async fn get_process(&self, id: ItemId) -> Result<Option<ProcessRecord>, StoreError> {
        (**self).get_process(id).await
    }

    async fn update_process(
        &self,
        id: ItemId,
        update: &ProcessUpdate,
    ) -> Result<ProcessRecord, StoreError> {
        (**self).update_process(id, update).await
    }

    async fn get_task(&self, id: ItemId) -> Result<Option<ProcessTask>, StoreError> {
        (**self).get_task(id).await
    }

    async fn update_task(&self, id: ItemId, update: &TaskUpdate)
    -> Result<ProcessTask, StoreError> {
        (**self).update_task(id, update).await
    }
}
