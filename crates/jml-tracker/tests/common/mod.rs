//! In-memory `ProcessStore` and recording notifier for protocol tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use jml_core::entities::{ProcessRecord, ProcessTask};
use jml_core::enums::{ProcessKind, ProcessStatus, TaskPriority, TaskStatus};
use jml_core::ids::ItemId;
use jml_core::updates::process::ProcessUpdate;
use jml_core::updates::task::TaskUpdate;
use jml_tracker::{NotifyError, ProcessStore, StoreError, WorkflowNotifier};

#[derive(Default)]
struct State {
    processes: BTreeMap<ItemId, ProcessRecord>,
    tasks: BTreeMap<ItemId, ProcessTask>,
    next_id: ItemId,
}

pub struct MemoryStore {
    kind: ProcessKind,
    state: Mutex<State>,
    /// Each pending conflict bumps the stored version before a guarded write.
    pending_conflicts: AtomicU32,
    fail_process_writes: AtomicBool,
    fail_process_reads: AtomicBool,
    process_writes: AtomicU32,
}

impl MemoryStore {
    pub fn new(kind: ProcessKind) -> Self {
        Self {
            kind,
            state: Mutex::new(State::default()),
            pending_conflicts: AtomicU32::new(0),
            fail_process_writes: AtomicBool::new(false),
            fail_process_reads: AtomicBool::new(false),
            process_writes: AtomicU32::new(0),
        }
    }

    pub fn seed_process(&self, status: ProcessStatus) -> ItemId {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        let now = Utc::now();
        state.processes.insert(
            id,
            ProcessRecord {
                id,
                kind: self.kind,
                title: format!("{} case {id}", self.kind),
                employee_name: "Jordan Lee".into(),
                employee_email: "jordan.lee@example.com".into(),
                department: None,
                key_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
                status,
                total_tasks: 0,
                completed_tasks: 0,
                completion_percentage: 0,
                completed_date: None,
                completion_notified_at: None,
                notes: Some("keep me".into()),
                version: 1,
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    pub fn seed_task(&self, process_id: ItemId, status: TaskStatus) -> ItemId {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        let now = Utc::now();
        let sort_order = i32::try_from(state.tasks.len()).unwrap();
        state.tasks.insert(
            id,
            ProcessTask {
                id,
                process_id,
                title: format!("task {id}"),
                category: None,
                status,
                priority: TaskPriority::Medium,
                due_date: None,
                completed_date: status.is_completed().then_some(now),
                sort_order,
                notes: None,
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    pub fn process(&self, id: ItemId) -> ProcessRecord {
        self.state.lock().unwrap().processes[&id].clone()
    }

    pub fn task(&self, id: ItemId) -> ProcessTask {
        self.state.lock().unwrap().tasks[&id].clone()
    }

    /// An unguarded write from another user.
    pub fn edit(&self, id: ItemId, notes: &str, notified_at: Option<DateTime<Utc>>) {
        let mut state = self.state.lock().unwrap();
        let process = state.processes.get_mut(&id).unwrap();
        process.notes = Some(notes.into());
        if notified_at.is_some() {
            process.completion_notified_at = notified_at;
        }
        process.version += 1;
    }

    pub fn inject_conflicts(&self, count: u32) {
        self.pending_conflicts.store(count, Ordering::SeqCst);
    }

    pub fn fail_process_writes(&self, fail: bool) {
        self.fail_process_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_process_reads(&self, fail: bool) {
        self.fail_process_reads.store(fail, Ordering::SeqCst);
    }

    pub fn process_writes(&self) -> u32 {
        self.process_writes.load(Ordering::SeqCst)
    }
}

fn apply_process_update(process: &mut ProcessRecord, update: &ProcessUpdate) {
    if let Some(title) = &update.title {
        process.title.clone_from(title);
    }
    if let Some(department) = &update.department {
        process.department.clone_from(department);
    }
    if let Some(key_date) = update.key_date {
        process.key_date = key_date;
    }
    if let Some(status) = update.status {
        process.status = status;
    }
    if let Some(notes) = &update.notes {
        process.notes.clone_from(notes);
    }
    if let Some(total) = update.total_tasks {
        process.total_tasks = total;
    }
    if let Some(completed) = update.completed_tasks {
        process.completed_tasks = completed;
    }
    if let Some(pct) = update.completion_percentage {
        process.completion_percentage = pct;
    }
    if let Some(completed_date) = update.completed_date {
        process.completed_date = completed_date;
    }
    if let Some(notified) = update.completion_notified_at {
        process.completion_notified_at = notified;
    }
    process.version += 1;
    process.updated_at = Utc::now();
}

fn apply_task_update(task: &mut ProcessTask, update: &TaskUpdate) {
    if let Some(title) = &update.title {
        task.title.clone_from(title);
    }
    if let Some(category) = &update.category {
        task.category.clone_from(category);
    }
    if let Some(status) = update.status {
        task.status = status;
    }
    if let Some(priority) = update.priority {
        task.priority = priority;
    }
    if let Some(due_date) = update.due_date {
        task.due_date = due_date;
    }
    if let Some(completed_date) = update.completed_date {
        task.completed_date = completed_date;
    }
    if let Some(sort_order) = update.sort_order {
        task.sort_order = sort_order;
    }
    if let Some(notes) = &update.notes {
        task.notes.clone_from(notes);
    }
    task.updated_at = Utc::now();
}

#[async_trait]
impl ProcessStore for MemoryStore {
    fn kind(&self) -> ProcessKind {
        self.kind
    }

    async fn list_tasks(&self, process_id: ItemId) -> Result<Vec<ProcessTask>, StoreError> {
        let state = self.state.lock().unwrap();
        let mut tasks: Vec<_> = state
            .tasks
            .values()
            .filter(|task| task.process_id == process_id)
            .cloned()
            .collect();
        tasks.sort_by_key(|task| (task.sort_order, task.id));
        Ok(tasks)
    }

    async fn get_process(&self, id: ItemId) -> Result<Option<ProcessRecord>, StoreError> {
        if self.fail_process_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("list service unavailable".into()));
        }
        Ok(self.state.lock().unwrap().processes.get(&id).cloned())
    }

    async fn update_process(
        &self,
        id: ItemId,
        update: &ProcessUpdate,
    ) -> Result<ProcessRecord, StoreError> {
        if self.fail_process_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("write rejected".into()));
        }
        let mut state = self.state.lock().unwrap();
        let process = state
            .processes
            .get_mut(&id)
            .ok_or(StoreError::NotFound { entity: "process", id })?;

        if self
            .pending_conflicts
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            // Someone else edited the record in the meantime.
            process.version += 1;
            process.notes = Some("edited concurrently".into());
        }

        if let Some(expected) = update.expected_version {
            if process.version != expected {
                return Err(StoreError::Conflict { id, expected });
            }
        }
        apply_process_update(process, update);
        self.process_writes.fetch_add(1, Ordering::SeqCst);
        Ok(process.clone())
    }

    async fn get_task(&self, id: ItemId) -> Result<Option<ProcessTask>, StoreError> {
        Ok(self.state.lock().unwrap().tasks.get(&id).cloned())
    }

    async fn update_task(
        &self,
        id: ItemId,
        update: &TaskUpdate,
    ) -> Result<ProcessTask, StoreError> {
        let mut state = self.state.lock().unwrap();
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(StoreError::NotFound { entity: "task", id })?;
        apply_task_update(task, update);
        Ok(task.clone())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    calls: Mutex<Vec<(ProcessKind, ItemId)>>,
    fail: AtomicBool,
}

impl RecordingNotifier {
    pub fn calls(&self) -> Vec<(ProcessKind, ItemId)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl WorkflowNotifier for RecordingNotifier {
    async fn complete_workflow(
        &self,
        kind: ProcessKind,
        process: &ProcessRecord,
    ) -> Result<(), NotifyError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(NotifyError::Unavailable("mail relay down".into()));
        }
        self.calls.lock().unwrap().push((kind, process.id));
        Ok(())
    }
}
