//! Process record repository: CRUD and version-guarded updates.

use chrono::Utc;
use jml_core::entities::{NewProcess, ProcessRecord};
use jml_core::enums::{ProcessKind, ProcessStatus};
use jml_core::ids::ItemId;
use jml_core::updates::process::ProcessUpdate;
use tracing::debug;

use super::SetClause;
use crate::error::DatabaseError;
use crate::helpers::{
    datetime_value, format_date, get_narrow, get_opt_string, parse_date, parse_datetime,
    parse_enum, parse_optional_datetime, text_value,
};
use crate::kinds::tables;
use crate::service::JmlService;

fn row_to_process(kind: ProcessKind, row: &libsql::Row) -> Result<ProcessRecord, DatabaseError> {
    Ok(ProcessRecord {
        id: row.get(0)?,
        kind,
        title: row.get(1)?,
        employee_name: row.get(2)?,
        employee_email: row.get(3)?,
        department: get_opt_string(row, 4)?,
        key_date: parse_date(&row.get::<String>(5)?)?,
        status: parse_enum(&row.get::<String>(6)?)?,
        total_tasks: get_narrow(row, 7)?,
        completed_tasks: get_narrow(row, 8)?,
        completion_percentage: get_narrow(row, 9)?,
        completed_date: parse_optional_datetime(get_opt_string(row, 10)?.as_deref())?,
        completion_notified_at: parse_optional_datetime(get_opt_string(row, 11)?.as_deref())?,
        notes: get_opt_string(row, 12)?,
        version: row.get(13)?,
        created_at: parse_datetime(&row.get::<String>(14)?)?,
        updated_at: parse_datetime(&row.get::<String>(15)?)?,
    })
}

impl JmlService {
    /// Insert a process record with zeroed counters and status `not_started`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails.
    pub async fn create_process(
        &self,
        kind: ProcessKind,
        new: &NewProcess,
    ) -> Result<ProcessRecord, DatabaseError> {
        let t = tables(kind);
        let now = Utc::now().to_rfc3339();

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO {} (title, employee_name, employee_email, department, {}, \
                     status, notes, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                    t.process_table, t.key_date_column
                ),
                libsql::params![
                    new.title.as_str(),
                    new.employee_name.as_str(),
                    new.employee_email.as_str(),
                    new.department.as_deref(),
                    format_date(new.key_date),
                    ProcessStatus::NotStarted.as_str(),
                    new.notes.as_deref(),
                    now.as_str(),
                    now.as_str()
                ],
            )
            .await?;

        let id = self.db().conn().last_insert_rowid();
        debug!(%kind, id, "process created");
        self.get_process(kind, id).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no such record exists.
    pub async fn get_process(
        &self,
        kind: ProcessKind,
        id: ItemId,
    ) -> Result<ProcessRecord, DatabaseError> {
        self.find_process(kind, id)
            .await?
            .ok_or(DatabaseError::NoResult)
    }

    /// Like [`Self::get_process`] but a missing record is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query or row parsing fails.
    pub async fn find_process(
        &self,
        kind: ProcessKind,
        id: ItemId,
    ) -> Result<Option<ProcessRecord>, DatabaseError> {
        let t = tables(kind);
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {} FROM {} WHERE id = ?1",
                    t.process_columns(),
                    t.process_table
                ),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_process(kind, &row)?)),
            None => Ok(None),
        }
    }

    /// Newest first, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query or row parsing fails.
    pub async fn list_processes(
        &self,
        kind: ProcessKind,
        status: Option<ProcessStatus>,
        limit: u32,
    ) -> Result<Vec<ProcessRecord>, DatabaseError> {
        let t = tables(kind);
        let mut rows = match status {
            Some(status) => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {} FROM {} WHERE status = ?1 \
                             ORDER BY created_at DESC, id DESC LIMIT ?2",
                            t.process_columns(),
                            t.process_table
                        ),
                        libsql::params![status.as_str(), i64::from(limit)],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {} FROM {} ORDER BY created_at DESC, id DESC LIMIT ?1",
                            t.process_columns(),
                            t.process_table
                        ),
                        [i64::from(limit)],
                    )
                    .await?
            }
        };

        let mut processes = Vec::new();
        while let Some(row) = rows.next().await? {
            processes.push(row_to_process(kind, &row)?);
        }
        Ok(processes)
    }

    /// Apply a partial update and bump `version` in one statement.
    ///
    /// When `expected_version` is set the row is only written if its stored
    /// version still matches.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the record does not exist,
    /// `DatabaseError::Conflict` if the version guard rejected the write, or
    /// another `DatabaseError` if the statement fails.
    pub async fn update_process(
        &self,
        kind: ProcessKind,
        id: ItemId,
        update: &ProcessUpdate,
    ) -> Result<ProcessRecord, DatabaseError> {
        let t = tables(kind);
        let mut clause = SetClause::default();

        if let Some(ref title) = update.title {
            clause.push("title", title.clone());
        }
        if let Some(ref department) = update.department {
            clause.push("department", text_value(department.as_deref()));
        }
        if let Some(key_date) = update.key_date {
            clause.push(t.key_date_column, format_date(key_date));
        }
        if let Some(status) = update.status {
            clause.push("status", status.as_str());
        }
        if let Some(ref notes) = update.notes {
            clause.push("notes", text_value(notes.as_deref()));
        }
        if let Some(total) = update.total_tasks {
            clause.push("total_tasks", i64::from(total));
        }
        if let Some(completed) = update.completed_tasks {
            clause.push("completed_tasks", i64::from(completed));
        }
        if let Some(pct) = update.completion_percentage {
            clause.push("completion_percentage", i64::from(pct));
        }
        if let Some(completed_date) = update.completed_date {
            clause.push("completed_date", datetime_value(completed_date));
        }
        if let Some(notified) = update.completion_notified_at {
            clause.push("completion_notified_at", datetime_value(notified));
        }

        if clause.is_empty() && update.expected_version.is_none() {
            return self.get_process(kind, id).await;
        }

        clause.push("updated_at", Utc::now().to_rfc3339());
        clause.push_raw("version = version + 1");

        let assignments = clause.assignments();
        let id_param = clause.bind(id);
        let mut sql = format!(
            "UPDATE {} SET {assignments} WHERE id = {id_param}",
            t.process_table
        );
        if let Some(expected) = update.expected_version {
            let version_param = clause.bind(expected);
            sql.push_str(&format!(" AND version = {version_param}"));
        }

        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(clause.into_params()))
            .await?;

        if affected == 0 {
            return match (update.expected_version, self.find_process(kind, id).await?) {
                (Some(expected), Some(_)) => Err(DatabaseError::Conflict {
                    table: t.process_table,
                    id,
                    expected,
                }),
                _ => Err(DatabaseError::NoResult),
            };
        }

        self.get_process(kind, id).await
    }

    /// Delete a process record and, through the foreign key, its tasks.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no such record exists.
    pub async fn delete_process(&self, kind: ProcessKind, id: ItemId) -> Result<(), DatabaseError> {
        let t = tables(kind);
        let affected = self
            .db()
            .conn()
            .execute(&format!("DELETE FROM {} WHERE id = ?1", t.process_table), [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NoResult);
        }
        debug!(%kind, id, "process deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};
    use jml_core::progress::ProgressSnapshot;
    use jml_core::updates::process::ProcessUpdateBuilder;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::test_support::{new_process, seed_process, seed_tasks, test_service};

    #[rstest]
    #[case(ProcessKind::Onboarding)]
    #[case(ProcessKind::Mover)]
    #[case(ProcessKind::Offboarding)]
    #[tokio::test]
    async fn create_and_get_every_kind(#[case] kind: ProcessKind) {
        let svc = test_service().await;
        let created = seed_process(&svc, kind).await;

        assert_eq!(created.kind, kind);
        assert_eq!(created.status, ProcessStatus::NotStarted);
        assert_eq!(created.progress(), ProgressSnapshot::default());
        assert_eq!(created.version, 1);
        assert_eq!(created.key_date, NaiveDate::from_ymd_opt(2026, 9, 1).unwrap());

        let fetched = svc.get_process(kind, created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn kinds_do_not_share_tables() {
        let svc = test_service().await;
        let onboarding = seed_process(&svc, ProcessKind::Onboarding).await;
        assert!(
            svc.find_process(ProcessKind::Mover, onboarding.id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn get_missing_is_no_result() {
        let svc = test_service().await;
        let err = svc.get_process(ProcessKind::Mover, 404).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NoResult));
    }

    #[tokio::test]
    async fn list_filters_by_status_and_limit() {
        let svc = test_service().await;
        let kind = ProcessKind::Offboarding;
        let first = seed_process(&svc, kind).await;
        seed_process(&svc, kind).await;
        seed_process(&svc, kind).await;
        svc.update_process(
            kind,
            first.id,
            &ProcessUpdateBuilder::new().status(ProcessStatus::OnHold).build(),
        )
        .await
        .unwrap();

        assert_eq!(svc.list_processes(kind, None, 10).await.unwrap().len(), 3);
        assert_eq!(svc.list_processes(kind, None, 2).await.unwrap().len(), 2);
        let held = svc
            .list_processes(kind, Some(ProcessStatus::OnHold), 10)
            .await
            .unwrap();
        assert_eq!(held.len(), 1);
        assert_eq!(held[0].id, first.id);
    }

    #[tokio::test]
    async fn update_writes_fields_and_bumps_version() {
        let svc = test_service().await;
        let kind = ProcessKind::Mover;
        let created = seed_process(&svc, kind).await;
        let stamp = Utc.with_ymd_and_hms(2026, 9, 2, 8, 0, 0).unwrap();

        let update = ProcessUpdateBuilder::new()
            .department(None)
            .key_date(NaiveDate::from_ymd_opt(2026, 10, 1).unwrap())
            .notes(Some("moving to Leeds".into()))
            .progress(ProgressSnapshot::new(2, 2))
            .status(ProcessStatus::Completed)
            .completed_date(Some(stamp))
            .build();
        let updated = svc.update_process(kind, created.id, &update).await.unwrap();

        assert_eq!(updated.version, 2);
        assert_eq!(updated.department, None);
        assert_eq!(updated.key_date, NaiveDate::from_ymd_opt(2026, 10, 1).unwrap());
        assert_eq!(updated.notes.as_deref(), Some("moving to Leeds"));
        assert_eq!(updated.completion_percentage, 100);
        assert_eq!(updated.completed_date, Some(stamp));
        assert!(updated.is_marked_complete());
    }

    #[tokio::test]
    async fn empty_update_is_a_read() {
        let svc = test_service().await;
        let created = seed_process(&svc, ProcessKind::Onboarding).await;
        let same = svc
            .update_process(ProcessKind::Onboarding, created.id, &ProcessUpdate::default())
            .await
            .unwrap();
        assert_eq!(same.version, 1);
    }

    #[tokio::test]
    async fn stale_version_is_a_conflict() {
        let svc = test_service().await;
        let kind = ProcessKind::Onboarding;
        let created = seed_process(&svc, kind).await;

        let first = ProcessUpdateBuilder::new()
            .title("renamed")
            .expected_version(created.version)
            .build();
        svc.update_process(kind, created.id, &first).await.unwrap();

        let stale = ProcessUpdateBuilder::new()
            .title("lost update")
            .expected_version(created.version)
            .build();
        let err = svc.update_process(kind, created.id, &stale).await.unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::Conflict { expected: 1, .. }
        ));
        assert_eq!(svc.get_process(kind, created.id).await.unwrap().title, "renamed");
    }

    #[tokio::test]
    async fn guarded_update_of_missing_record_is_no_result() {
        let svc = test_service().await;
        let update = ProcessUpdateBuilder::new().title("x").expected_version(1).build();
        let err = svc
            .update_process(ProcessKind::Mover, 99, &update)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::NoResult));
    }

    #[tokio::test]
    async fn counters_must_stay_consistent() {
        let svc = test_service().await;
        let kind = ProcessKind::Offboarding;
        let created = seed_process(&svc, kind).await;
        let update = ProcessUpdate {
            total_tasks: Some(1),
            completed_tasks: Some(2),
            ..ProcessUpdate::default()
        };
        assert!(svc.update_process(kind, created.id, &update).await.is_err());
    }

    #[tokio::test]
    async fn delete_cascades_to_tasks() {
        let svc = test_service().await;
        let kind = ProcessKind::Onboarding;
        let process = svc.create_process(kind, &new_process("Grace Hopper")).await.unwrap();
        let tasks = seed_tasks(&svc, kind, process.id, 3).await;

        svc.delete_process(kind, process.id).await.unwrap();

        for task in tasks {
            assert!(svc.find_task(kind, task.id).await.unwrap().is_none());
        }
        assert!(matches!(
            svc.delete_process(kind, process.id).await.unwrap_err(),
            DatabaseError::NoResult
        ));
    }
}
