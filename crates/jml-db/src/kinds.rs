//! Per-kind table and column mapping.
//!
//! The three process kinds share one schema shape; only table names, the
//! parent key column, and the key date column differ.

use jml_core::enums::ProcessKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindTables {
    pub process_table: &'static str,
    pub task_table: &'static str,
    /// Foreign key column on the task table.
    pub parent_column: &'static str,
    pub key_date_column: &'static str,
}

/// Exhaustive over `ProcessKind`.
#[must_use]
pub const fn tables(kind: ProcessKind) -> KindTables {
    match kind {
        ProcessKind::Onboarding => KindTables {
            process_table: "onboardings",
            task_table: "onboarding_tasks",
            parent_column: "onboarding_id",
            key_date_column: ProcessKind::Onboarding.key_date_field(),
        },
        ProcessKind::Mover => KindTables {
            process_table: "movers",
            task_table: "mover_tasks",
            parent_column: "mover_id",
            key_date_column: ProcessKind::Mover.key_date_field(),
        },
        ProcessKind::Offboarding => KindTables {
            process_table: "offboardings",
            task_table: "offboarding_tasks",
            parent_column: "offboarding_id",
            key_date_column: ProcessKind::Offboarding.key_date_field(),
        },
    }
}

impl KindTables {
    /// Process columns in the order `row_to_process` reads them.
    #[must_use]
    pub fn process_columns(&self) -> String {
        format!(
            "id, title, employee_name, employee_email, department, {}, status, \
             total_tasks, completed_tasks, completion_percentage, completed_date, \
             completion_notified_at, notes, version, created_at, updated_at",
            self.key_date_column
        )
    }

    /// Task columns in the order `row_to_task` reads them.
    #[must_use]
    pub fn task_columns(&self) -> String {
        format!(
            "id, {}, title, category, status, priority, due_date, completed_date, \
             sort_order, notes, created_at, updated_at",
            self.parent_column
        )
    }
}
