//! Process record update builder.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::enums::ProcessStatus;
use crate::progress::ProgressSnapshot;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProcessStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tasks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_tasks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_percentage: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<Option<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_notified_at: Option<Option<DateTime<Utc>>>,
    /// Write only if the stored version still equals this value.
    #[serde(skip)]
    pub expected_version: Option<i64>,
}

impl ProcessUpdate {
    /// No field would be written.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.department.is_none()
            && self.key_date.is_none()
            && self.status.is_none()
            && self.notes.is_none()
            && self.total_tasks.is_none()
            && self.completed_tasks.is_none()
            && self.completion_percentage.is_none()
            && self.completed_date.is_none()
            && self.completion_notified_at.is_none()
    }
}

pub struct ProcessUpdateBuilder(ProcessUpdate);

impl ProcessUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ProcessUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn department(mut self, department: Option<String>) -> Self {
        self.0.department = Some(department);
        self
    }

    #[must_use]
    pub const fn key_date(mut self, key_date: NaiveDate) -> Self {
        self.0.key_date = Some(key_date);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: ProcessStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.0.notes = Some(notes);
        self
    }

    /// Set all three derived counters from one snapshot.
    #[must_use]
    pub const fn progress(mut self, progress: ProgressSnapshot) -> Self {
        self.0.total_tasks = Some(progress.total_tasks);
        self.0.completed_tasks = Some(progress.completed_tasks);
        self.0.completion_percentage = Some(progress.completion_percentage);
        self
    }

    #[must_use]
    pub const fn completed_date(mut self, completed_date: Option<DateTime<Utc>>) -> Self {
        self.0.completed_date = Some(completed_date);
        self
    }

    #[must_use]
    pub const fn completion_notified_at(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.0.completion_notified_at = Some(at);
        self
    }

    #[must_use]
    pub const fn expected_version(mut self, version: i64) -> Self {
        self.0.expected_version = Some(version);
        self
    }

    #[must_use]
    pub fn build(self) -> ProcessUpdate {
        self.0
    }
}

impl Default for ProcessUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_sets_all_counters() {
        let update = ProcessUpdateBuilder::new()
            .progress(ProgressSnapshot::new(4, 2))
            .build();
        assert_eq!(update.total_tasks, Some(4));
        assert_eq!(update.completed_tasks, Some(2));
        assert_eq!(update.completion_percentage, Some(50));
        assert!(update.status.is_none());
    }

    #[test]
    fn version_alone_is_empty() {
        let update = ProcessUpdateBuilder::new().expected_version(3).build();
        assert!(update.is_empty());
        assert_eq!(update.expected_version, Some(3));
    }

    #[test]
    fn serializes_changed_fields_only() {
        let update = ProcessUpdateBuilder::new()
            .status(ProcessStatus::Completed)
            .notes(None)
            .expected_version(9)
            .build();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "status": "completed", "notes": null })
        );
    }
}
