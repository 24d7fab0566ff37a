//! Serde roundtrip and JsonSchema validation for the payloads `jml` prints.

use chrono::{NaiveDate, TimeZone, Utc};
use schemars::schema_for;
use jml_core::entities::*;
use jml_core::enums::*;
use jml_core::progress::ProgressSnapshot;
use jml_core::responses::*;

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            pretty_assertions::assert_eq!(recovered, val);

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_task() -> ProcessTask {
    let at = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
    ProcessTask {
        id: 11,
        process_id: 4,
        title: "Issue laptop".into(),
        category: Some("IT".into()),
        status: TaskStatus::Completed,
        priority: TaskPriority::High,
        due_date: NaiveDate::from_ymd_opt(2026, 3, 1),
        completed_date: Some(at),
        sort_order: 1,
        notes: None,
        created_at: at,
        updated_at: at,
    }
}

roundtrip_and_validate!(
    process_record_roundtrip,
    ProcessRecord,
    ProcessRecord {
        id: 4,
        kind: ProcessKind::Offboarding,
        title: "Leaver: Sam Doe".into(),
        employee_name: "Sam Doe".into(),
        employee_email: "sam.doe@example.com".into(),
        department: Some("Finance".into()),
        key_date: NaiveDate::from_ymd_opt(2026, 4, 30).unwrap(),
        status: ProcessStatus::InProgress,
        total_tasks: 3,
        completed_tasks: 1,
        completion_percentage: 33,
        completed_date: None,
        completion_notified_at: None,
        notes: None,
        version: 2,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(process_task_roundtrip, ProcessTask, sample_task());

roundtrip_and_validate!(
    completion_check_roundtrip,
    CompletionCheck,
    CompletionCheck {
        process_id: 4,
        process_type: ProcessKind::Mover,
        employee_name: Some("Sam Doe".into()),
        was_completed: true,
        notification_sent: false,
        already_notified: true,
    }
);

roundtrip_and_validate!(
    task_status_outcome_roundtrip,
    TaskStatusOutcome,
    TaskStatusOutcome {
        task: sample_task(),
        recalculation: Some(RecalculationOutcome {
            process_id: 4,
            process_type: ProcessKind::Onboarding,
            progress: ProgressSnapshot::new(3, 3),
            status: ProcessStatus::Completed,
            transitioned_to_completed: true,
            attempts: 1,
        }),
        completion: CompletionCheck::not_completed(4, ProcessKind::Onboarding, None),
    }
);

#[test]
fn completion_check_uses_snake_case_keys() {
    let check = CompletionCheck::not_completed(9, ProcessKind::Onboarding, None);
    let json = serde_json::to_value(&check).unwrap();
    assert_eq!(json["process_type"], "onboarding");
    assert_eq!(json["was_completed"], false);
    assert_eq!(json["notification_sent"], false);
}
