//! Workflow outbox: completion workflow requests awaiting the external runner.

use chrono::Utc;
use jml_core::entities::{ProcessRecord, WorkflowOutboxEntry};
use jml_core::enums::ProcessKind;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::service::JmlService;

const SELECT_COLS: &str =
    "id, kind, process_id, workflow, employee_name, employee_email, created_at";

fn row_to_entry(row: &libsql::Row) -> Result<WorkflowOutboxEntry, DatabaseError> {
    Ok(WorkflowOutboxEntry {
        id: row.get(0)?,
        kind: parse_enum(&row.get::<String>(1)?)?,
        process_id: row.get(2)?,
        workflow: row.get(3)?,
        employee_name: row.get(4)?,
        employee_email: row.get(5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl JmlService {
    /// Queue the kind's completion workflow for a process.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails.
    pub async fn enqueue_workflow(
        &self,
        kind: ProcessKind,
        process: &ProcessRecord,
    ) -> Result<WorkflowOutboxEntry, DatabaseError> {
        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "INSERT INTO workflow_outbox (kind, process_id, workflow, employee_name, employee_email, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    kind.as_str(),
                    process.id,
                    kind.workflow_name(),
                    process.employee_name.as_str(),
                    process.employee_email.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(WorkflowOutboxEntry {
            id: self.db().conn().last_insert_rowid(),
            kind,
            process_id: process.id,
            workflow: kind.workflow_name().to_string(),
            employee_name: process.employee_name.clone(),
            employee_email: process.employee_email.clone(),
            created_at: now,
        })
    }

    /// Oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query or row parsing fails.
    pub async fn list_outbox(&self, limit: u32) -> Result<Vec<WorkflowOutboxEntry>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM workflow_outbox ORDER BY id LIMIT ?1"),
                [i64::from(limit)],
            )
            .await?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_entry(&row)?);
        }
        Ok(entries)
    }
}
