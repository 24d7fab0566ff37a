//! Task repository: checklist items owned by a process record.

use chrono::Utc;
use jml_core::entities::{NewTask, ProcessTask};
use jml_core::enums::{ProcessKind, TaskStatus};
use jml_core::ids::ItemId;
use jml_core::updates::task::TaskUpdate;
use tracing::debug;

use super::SetClause;
use crate::error::DatabaseError;
use crate::helpers::{
    datetime_value, format_date, get_narrow, get_opt_string, parse_datetime, parse_enum,
    parse_optional_date, parse_optional_datetime, text_value,
};
use crate::kinds::tables;
use crate::service::JmlService;

fn row_to_task(row: &libsql::Row) -> Result<ProcessTask, DatabaseError> {
    Ok(ProcessTask {
        id: row.get(0)?,
        process_id: row.get(1)?,
        title: row.get(2)?,
        category: get_opt_string(row, 3)?,
        status: parse_enum(&row.get::<String>(4)?)?,
        priority: parse_enum(&row.get::<String>(5)?)?,
        due_date: parse_optional_date(get_opt_string(row, 6)?.as_deref())?,
        completed_date: parse_optional_datetime(get_opt_string(row, 7)?.as_deref())?,
        sort_order: get_narrow(row, 8)?,
        notes: get_opt_string(row, 9)?,
        created_at: parse_datetime(&row.get::<String>(10)?)?,
        updated_at: parse_datetime(&row.get::<String>(11)?)?,
    })
}

impl JmlService {
    /// Insert a `pending` task under an existing process record.
    ///
    /// Does not touch the parent's counters; callers recalculate afterwards.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the parent process does not exist.
    pub async fn create_task(
        &self,
        kind: ProcessKind,
        new: &NewTask,
    ) -> Result<ProcessTask, DatabaseError> {
        if self.find_process(kind, new.process_id).await?.is_none() {
            return Err(DatabaseError::NoResult);
        }

        let t = tables(kind);
        let now = Utc::now().to_rfc3339();
        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO {} ({}, title, category, status, priority, due_date, \
                     sort_order, notes, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                    t.task_table, t.parent_column
                ),
                libsql::params![
                    new.process_id,
                    new.title.as_str(),
                    new.category.as_deref(),
                    TaskStatus::Pending.as_str(),
                    new.priority.as_str(),
                    new.due_date.map(format_date),
                    i64::from(new.sort_order),
                    new.notes.as_deref(),
                    now.as_str(),
                    now.as_str()
                ],
            )
            .await?;

        let id = self.db().conn().last_insert_rowid();
        debug!(%kind, id, process_id = new.process_id, "task created");
        self.get_task(kind, id).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no such task exists.
    pub async fn get_task(&self, kind: ProcessKind, id: ItemId) -> Result<ProcessTask, DatabaseError> {
        self.find_task(kind, id).await?.ok_or(DatabaseError::NoResult)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query or row parsing fails.
    pub async fn find_task(
        &self,
        kind: ProcessKind,
        id: ItemId,
    ) -> Result<Option<ProcessTask>, DatabaseError> {
        let t = tables(kind);
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {} FROM {} WHERE id = ?1", t.task_columns(), t.task_table),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    /// Every task of one process, in checklist order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query or row parsing fails.
    pub async fn list_tasks(
        &self,
        kind: ProcessKind,
        process_id: ItemId,
    ) -> Result<Vec<ProcessTask>, DatabaseError> {
        let t = tables(kind);
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {} FROM {} WHERE {} = ?1 ORDER BY sort_order, id",
                    t.task_columns(),
                    t.task_table,
                    t.parent_column
                ),
                [process_id],
            )
            .await?;

        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }

    /// Next free `sort_order` for a process's checklist.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn next_sort_order(
        &self,
        kind: ProcessKind,
        process_id: ItemId,
    ) -> Result<i32, DatabaseError> {
        let t = tables(kind);
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT COALESCE(MAX(sort_order) + 1, 0) FROM {} WHERE {} = ?1",
                    t.task_table, t.parent_column
                ),
                [process_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        get_narrow(&row, 0)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no such task exists.
    pub async fn update_task(
        &self,
        kind: ProcessKind,
        id: ItemId,
        update: &TaskUpdate,
    ) -> Result<ProcessTask, DatabaseError> {
        let t = tables(kind);
        let mut clause = SetClause::default();

        if let Some(ref title) = update.title {
            clause.push("title", title.clone());
        }
        if let Some(ref category) = update.category {
            clause.push("category", text_value(category.as_deref()));
        }
        if let Some(status) = update.status {
            clause.push("status", status.as_str());
        }
        if let Some(priority) = update.priority {
            clause.push("priority", priority.as_str());
        }
        if let Some(due_date) = update.due_date {
            clause.push("due_date", text_value(due_date.map(format_date).as_deref()));
        }
        if let Some(completed_date) = update.completed_date {
            clause.push("completed_date", datetime_value(completed_date));
        }
        if let Some(sort_order) = update.sort_order {
            clause.push("sort_order", i64::from(sort_order));
        }
        if let Some(ref notes) = update.notes {
            clause.push("notes", text_value(notes.as_deref()));
        }

        if clause.is_empty() {
            return self.get_task(kind, id).await;
        }
        clause.push("updated_at", Utc::now().to_rfc3339());

        let assignments = clause.assignments();
        let id_param = clause.bind(id);
        let sql = format!("UPDATE {} SET {assignments} WHERE id = {id_param}", t.task_table);
        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(clause.into_params()))
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NoResult);
        }

        self.get_task(kind, id).await
    }
}
