use std::sync::Arc;

use anyhow::Context;
use jml_config::{JmlConfig, TrackerConfig, WorkflowSink};
use jml_core::enums::ProcessKind;
use jml_db::{JmlService, KindStore, OutboxNotifier};
use jml_tracker::{LogNotifier, ProgressTracker, RetryPolicy, WorkflowNotifier};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: Arc<JmlService>,
    pub config: JmlConfig,
    notifier: Option<Arc<dyn WorkflowNotifier>>,
}

impl AppContext {
    /// Open the configured database and pick the workflow sink.
    pub async fn init(config: JmlConfig) -> anyhow::Result<Self> {
        let service = JmlService::new_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;
        let service = Arc::new(service);
        let notifier = notifier_for(config.workflow.sink, &service);
        tracing::debug!(
            db = %config.database.path,
            sink = ?config.workflow.sink,
            "application context ready"
        );
        Ok(Self {
            service,
            config,
            notifier,
        })
    }

    /// A tracker for one process kind, wired to the configured sink and retry policy.
    #[must_use]
    pub fn tracker(&self, kind: ProcessKind) -> ProgressTracker<KindStore> {
        let tracker = ProgressTracker::new(self.service.store(kind))
            .with_retry(retry_policy(&self.config.tracker));
        match &self.notifier {
            Some(notifier) => tracker.with_notifier(Arc::clone(notifier)),
            None => tracker,
        }
    }
}

fn notifier_for(
    sink: WorkflowSink,
    service: &Arc<JmlService>,
) -> Option<Arc<dyn WorkflowNotifier>> {
    match sink {
        WorkflowSink::Outbox => Some(Arc::new(OutboxNotifier::new(Arc::clone(service)))),
        WorkflowSink::Log => Some(Arc::new(LogNotifier)),
        WorkflowSink::Disabled => None,
    }
}

const fn retry_policy(config: &TrackerConfig) -> RetryPolicy {
    RetryPolicy {
        max_attempts: config.max_attempts,
        base_delay: config.base_delay(),
        max_delay: config.max_delay(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn retry_policy_follows_config() {
        let policy = retry_policy(&TrackerConfig {
            max_attempts: 5,
            base_delay_ms: 10,
            max_delay_ms: 80,
        });
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.base_delay, Duration::from_millis(10));
        assert_eq!(policy.max_delay, Duration::from_millis(80));
    }

    #[tokio::test]
    async fn disabled_sink_has_no_notifier() {
        let mut config = JmlConfig::default();
        config.database.path = ":memory:".into();
        config.workflow.sink = WorkflowSink::Disabled;
        let ctx = AppContext::init(config).await.unwrap();
        assert!(ctx.notifier.is_none());
    }

    #[tokio::test]
    async fn outbox_sink_queues_on_completion() {
        let mut config = JmlConfig::default();
        config.database.path = ":memory:".into();
        let ctx = AppContext::init(config).await.unwrap();
        assert!(ctx.notifier.is_some());

        let kind = ProcessKind::Mover;
        let process = ctx
            .service
            .create_process(
                kind,
                &jml_core::entities::NewProcess {
                    title: "Transfer".into(),
                    employee_name: "Lee Park".into(),
                    employee_email: "lee.park@example.com".into(),
                    department: None,
                    key_date: chrono::NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
                    notes: None,
                },
            )
            .await
            .unwrap();
        let task = ctx
            .service
            .create_task(
                kind,
                &jml_core::entities::NewTask::titled(process.id, "Update access", 0),
            )
            .await
            .unwrap();

        let outcome = ctx
            .tracker(kind)
            .apply_task_status(task.id, jml_core::enums::TaskStatus::Completed)
            .await
            .unwrap();
        assert!(outcome.completion.notification_sent);
        assert_eq!(ctx.service.list_outbox(10).await.unwrap().len(), 1);
    }
}
