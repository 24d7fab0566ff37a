//! `ProcessStore` over the libSQL tables of one process kind.

use std::sync::Arc;

use async_trait::async_trait;
use jml_core::entities::{ProcessRecord, ProcessTask};
use jml_core::enums::ProcessKind;
use jml_core::ids::ItemId;
use jml_core::updates::process::ProcessUpdate;
use jml_core::updates::task::TaskUpdate;
use jml_tracker::{ProcessStore, StoreError};

use crate::service::JmlService;

/// Binds a shared service to one process kind.
#[derive(Clone)]
pub struct KindStore {
    service: Arc<JmlService>,
    kind: ProcessKind,
}

impl KindStore {
    #[must_use]
    pub const fn new(service: Arc<JmlService>, kind: ProcessKind) -> Self {
        Self { service, kind }
    }

    #[must_use]
    pub fn service(&self) -> &JmlService {
        &self.service
    }
}

#[async_trait]
impl ProcessStore for KindStore {
    fn kind(&self) -> ProcessKind {
        self.kind
    }

    async fn list_tasks(&self, process_id: ItemId) -> Result<Vec<ProcessTask>, StoreError> {
        self.service
            .list_tasks(self.kind, process_id)
            .await
            .map_err(|e| e.into_store_error("process", process_id))
    }

    async fn get_process(&self, id: ItemId) -> Result<Option<ProcessRecord>, StoreError> {
        self.service
            .find_process(self.kind, id)
            .await
            .map_err(|e| e.into_store_error("process", id))
    }

    async fn update_process(
        &self,
        id: ItemId,
        update: &ProcessUpdate,
    ) -> Result<ProcessRecord, StoreError> {
        self.service
            .update_process(self.kind, id, update)
            .await
            .map_err(|e| e.into_store_error("process", id))
    }

    async fn get_task(&self, id: ItemId) -> Result<Option<ProcessTask>, StoreError> {
        self.service
            .find_task(self.kind, id)
            .await
            .map_err(|e| e.into_store_error("task", id))
    }

    async fn update_task(&self, id: ItemId, update: &TaskUpdate) -> Result<ProcessTask, StoreError> {
        self.service
            .update_task(self.kind, id, update)
            .await
            .map_err(|e| e.into_store_error("task", id))
    }
}

impl JmlService {
    /// A `ProcessStore` for one kind over this shared service.
    #[must_use]
    pub fn store(self: &Arc<Self>, kind: ProcessKind) -> KindStore {
        KindStore::new(Arc::clone(self), kind)
    }
}
