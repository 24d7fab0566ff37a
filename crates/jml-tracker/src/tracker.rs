//! `ProgressTracker`: recalculation, completion check, and task status flow.

use std::sync::Arc;

use chrono::Utc;
use jml_core::entities::ProcessRecord;
use jml_core::ids::{ItemId, validate_item_id};
use jml_core::progress::ProgressSnapshot;
use jml_core::responses::{CompletionCheck, RecalculationOutcome, TaskStatusOutcome};
use jml_core::enums::{ProcessStatus, TaskStatus};
use jml_core::updates::process::ProcessUpdateBuilder;
use jml_core::updates::task::{TaskUpdate, TaskUpdateBuilder};
use tracing::{debug, error, info, warn};

use crate::error::{StoreError, TrackerError};
use crate::notify::WorkflowNotifier;
use crate::recalc::plan_update;
use crate::retry::RetryPolicy;
use crate::store::ProcessStore;

/// Keeps one process kind's derived counters and completion state in step
/// with its tasks.
pub struct ProgressTracker<S> {
    store: S,
    notifier: Option<Arc<dyn WorkflowNotifier>>,
    retry: RetryPolicy,
}

impl<S: ProcessStore> ProgressTracker<S> {
    /// A tracker that never sends completion workflows.
    pub fn new(store: S) -> Self {
        Self {
            store,
            notifier: None,
            retry: RetryPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn WorkflowNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Recount the process's tasks and persist counters, failures included.
    ///
    /// Reads the record and the full task set fresh on every attempt, so
    /// repeating the call is always safe.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError` if the id is invalid, the process is missing,
    /// the store fails, or every attempt lost a version race.
    pub async fn try_recalculate(
        &self,
        process_id: ItemId,
    ) -> Result<RecalculationOutcome, TrackerError> {
        validate_item_id(process_id)?;
        let kind = self.store.kind();
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            let process = self.require_process(process_id).await?;
            let tasks = self.store.list_tasks(process_id).await?;
            let progress = ProgressSnapshot::from_statuses(tasks.iter().map(|task| task.status));
            let update = plan_update(&process, progress, Utc::now());
            let transitioned = update.status == Some(ProcessStatus::Completed);

            debug!(
                %kind,
                process_id,
                attempt,
                total = progress.total_tasks,
                completed = progress.completed_tasks,
                percentage = progress.completion_percentage,
                "writing recalculated progress"
            );

            match self.store.update_process(process_id, &update).await {
                Ok(updated) => {
                    if transitioned {
                        info!(%kind, process_id, "process reached 100% and is now completed");
                    }
                    return Ok(RecalculationOutcome {
                        process_id,
                        process_type: kind,
                        progress: updated.progress(),
                        status: updated.status,
                        transitioned_to_completed: transitioned,
                        attempts: attempt,
                    });
                }
                Err(StoreError::Conflict { expected, .. }) if self.retry.can_retry(attempt) => {
                    debug!(%kind, process_id, expected, attempt, "version conflict, recounting");
                    tokio::time::sleep(self.retry.delay_after(attempt)).await;
                }
                Err(StoreError::Conflict { .. }) => {
                    return Err(TrackerError::ConflictExhausted {
                        kind,
                        id: process_id,
                        attempts: attempt,
                    });
                }
                Err(other) => return Err(other.into()),
            }
        }
    }

    /// Recalculate, logging and swallowing any failure.
    ///
    /// `None` means the counters were left as they were.
    pub async fn recalculate(&self, process_id: ItemId) -> Option<RecalculationOutcome> {
        match self.try_recalculate(process_id).await {
            Ok(outcome) => Some(outcome),
            Err(error) => {
                warn!(kind = %self.store.kind(), process_id, %error, "recalculation failed; counters left stale");
                None
            }
        }
    }

    /// Send the completion workflow once for a process at 100%.
    ///
    /// Never fails: an unreadable process reports `was_completed: false`, and a
    /// delivery failure reports `notification_sent: false` while still
    /// reporting `was_completed: true`. The notified stamp is claimed with a
    /// version-guarded write before the workflow is sent and released again if
    /// delivery fails, so concurrent or repeated checks deliver at most once.
    pub async fn check_completion(&self, process_id: ItemId) -> CompletionCheck {
        let kind = self.store.kind();
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            let process = match self.store.get_process(process_id).await {
                Ok(Some(process)) => process,
                Ok(None) => {
                    warn!(%kind, process_id, "completion check on missing process");
                    return CompletionCheck::not_completed(process_id, kind, None);
                }
                Err(error) => {
                    warn!(%kind, process_id, %error, "completion check could not read process");
                    return CompletionCheck::not_completed(process_id, kind, None);
                }
            };

            let mut check = CompletionCheck::not_completed(
                process_id,
                kind,
                Some(process.employee_name.clone()),
            );
            if !process.is_marked_complete() {
                return check;
            }
            check.was_completed = true;

            if process.completion_notified_at.is_some() {
                debug!(%kind, process_id, "completion workflow already delivered");
                check.already_notified = true;
                return check;
            }

            let Some(notifier) = self.notifier.as_ref() else {
                debug!(%kind, process_id, "no workflow sink configured");
                return check;
            };

            let claim = ProcessUpdateBuilder::new()
                .completion_notified_at(Some(Utc::now()))
                .expected_version(process.version)
                .build();
            let claimed = match self.store.update_process(process_id, &claim).await {
                Ok(claimed) => claimed,
                Err(StoreError::Conflict { .. }) if self.retry.can_retry(attempt) => {
                    tokio::time::sleep(self.retry.delay_after(attempt)).await;
                    continue;
                }
                Err(error) => {
                    warn!(%kind, process_id, %error, "could not claim completion notification");
                    return check;
                }
            };

            match notifier.complete_workflow(kind, &claimed).await {
                Ok(()) => {
                    info!(%kind, process_id, workflow = kind.workflow_name(), "completion workflow delivered");
                    check.notification_sent = true;
                }
                Err(error) => {
                    warn!(%kind, process_id, %error, "completion workflow failed");
                    self.release_claim(&claimed).await;
                }
            }
            return check;
        }
    }

    /// Persist a user's task status change, then recalculate and check
    /// completion for the owning process.
    ///
    /// Only the task write can fail the call; the follow-up steps log their
    /// own failures.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError` if the id is invalid, the task is missing, or the
    /// task write fails.
    pub async fn apply_task_status(
        &self,
        task_id: ItemId,
        status: TaskStatus,
    ) -> Result<TaskStatusOutcome, TrackerError> {
        validate_item_id(task_id)?;
        let kind = self.store.kind();
        let current = self
            .store
            .get_task(task_id)
            .await?
            .ok_or(TrackerError::TaskNotFound { kind, id: task_id })?;

        // Re-completing a completed task keeps its original stamp.
        let update = if current.status.is_completed() && status.is_completed() {
            TaskUpdateBuilder::new().status(status).build()
        } else {
            TaskUpdate::status_change(status, Utc::now())
        };
        let task = self.store.update_task(task_id, &update).await?;
        debug!(%kind, task_id, from = %current.status, to = %status, "task status changed");

        let recalculation = self.recalculate(task.process_id).await;
        let completion = self.check_completion(task.process_id).await;

        Ok(TaskStatusOutcome {
            task,
            recalculation,
            completion,
        })
    }

    async fn require_process(&self, process_id: ItemId) -> Result<ProcessRecord, TrackerError> {
        self.store
            .get_process(process_id)
            .await?
            .ok_or(TrackerError::ProcessNotFound {
                kind: self.store.kind(),
                id: process_id,
            })
    }

    /// Clear this call's notified stamp after a failed delivery.
    ///
    /// A conflicting write re-reads the record and clears again against the
    /// new version, as long as the stored stamp is still the one claimed here.
    async fn release_claim(&self, claimed: &ProcessRecord) {
        let kind = self.store.kind();
        let process_id = claimed.id;
        let stamp = claimed.completion_notified_at;
        let mut version = claimed.version;
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            let release = ProcessUpdateBuilder::new()
                .completion_notified_at(None)
                .expected_version(version)
                .build();
            match self.store.update_process(process_id, &release).await {
                Ok(_) => {
                    debug!(%kind, process_id, attempt, "notification claim released");
                    return;
                }
                Err(StoreError::Conflict { expected, .. }) if self.retry.can_retry(attempt) => {
                    debug!(%kind, process_id, expected, attempt, "version conflict, re-reading claim");
                    tokio::time::sleep(self.retry.delay_after(attempt)).await;
                    match self.store.get_process(process_id).await {
                        Ok(Some(current)) if current.completion_notified_at == stamp => {
                            version = current.version;
                        }
                        Ok(Some(_) | None) => {
                            debug!(%kind, process_id, "notification claim no longer held");
                            return;
                        }
                        Err(error) => {
                            error!(
                                %kind,
                                process_id,
                                %error,
                                "could not re-read notification claim; workflow will not be retried"
                            );
                            return;
                        }
                    }
                }
                Err(error) => {
                    error!(
                        %kind,
                        process_id,
                        attempts = attempt,
                        %error,
                        "could not release notification claim; workflow will not be retried"
                    );
                    return;
                }
            }
        }
    }
}
