//! Shared fixtures for the inline repo tests.

use chrono::NaiveDate;
use jml_core::entities::{NewProcess, NewTask, ProcessRecord, ProcessTask};
use jml_core::enums::ProcessKind;
use jml_core::ids::ItemId;

use crate::service::JmlService;

pub async fn test_service() -> JmlService {
    JmlService::new_local(":memory:").await.unwrap()
}

pub fn new_process(name: &str) -> NewProcess {
    NewProcess {
        title: format!("Case for {name}"),
        employee_name: name.to_string(),
        employee_email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        department: Some("Finance".into()),
        key_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        notes: None,
    }
}

pub async fn seed_process(svc: &JmlService, kind: ProcessKind) -> ProcessRecord {
    svc.create_process(kind, &new_process("Ada Byron")).await.unwrap()
}

pub async fn seed_tasks(
    svc: &JmlService,
    kind: ProcessKind,
    process_id: ItemId,
    count: i32,
) -> Vec<ProcessTask> {
    let mut tasks = Vec::new();
    for n in 0..count {
        let task = NewTask::titled(process_id, format!("step {n}"), n);
        tasks.push(svc.create_task(kind, &task).await.unwrap());
    }
    tasks
}
