//! Repository modules implementing CRUD for process records, tasks, and the
//! workflow outbox.
//!
//! Each module adds methods to `JmlService` via `impl JmlService` blocks.
//! Every method takes the `ProcessKind` it operates on; see `crate::kinds`.

pub mod outbox;
pub mod process;
pub mod task;

/// Accumulates `column = ?N` assignments for a dynamic UPDATE.
#[derive(Default)]
pub(crate) struct SetClause {
    sets: Vec<String>,
    params: Vec<libsql::Value>,
}

impl SetClause {
    pub(crate) fn push(&mut self, column: &str, value: impl Into<libsql::Value>) {
        self.params.push(value.into());
        self.sets.push(format!("{column} = ?{}", self.params.len()));
    }

    /// A raw SQL assignment that binds nothing, e.g. `version = version + 1`.
    pub(crate) fn push_raw(&mut self, assignment: &str) {
        self.sets.push(assignment.to_string());
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Bind a value for the WHERE clause and return its placeholder.
    pub(crate) fn bind(&mut self, value: impl Into<libsql::Value>) -> String {
        self.params.push(value.into());
        format!("?{}", self.params.len())
    }

    pub(crate) fn assignments(&self) -> String {
        self.sets.join(", ")
    }

    pub(crate) fn into_params(self) -> Vec<libsql::Value> {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::SetClause;

    #[test]
    fn placeholders_follow_bind_order() {
        let mut clause = SetClause::default();
        clause.push("title", "x");
        clause.push_raw("version = version + 1");
        clause.push("notes", libsql::Value::Null);
        let id = clause.bind(7i64);
        assert_eq!(clause.assignments(), "title = ?1, version = version + 1, notes = ?2");
        assert_eq!(id, "?3");
        assert_eq!(clause.into_params().len(), 3);
    }
}
