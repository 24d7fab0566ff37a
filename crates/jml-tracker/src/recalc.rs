//! Pure planning step of a recalculation.

use chrono::{DateTime, Utc};
use jml_core::entities::ProcessRecord;
use jml_core::enums::ProcessStatus;
use jml_core::progress::ProgressSnapshot;
use jml_core::updates::process::{ProcessUpdate, ProcessUpdateBuilder};

/// Build the single write that brings `process` in line with `progress`.
///
/// Counters are always written. A complete task set additionally forces
/// `Completed` and stamps `completed_date` if either is missing. An incomplete
/// set leaves status and completion date untouched. The write is guarded by
/// the version that was read.
#[must_use]
pub fn plan_update(
    process: &ProcessRecord,
    progress: ProgressSnapshot,
    now: DateTime<Utc>,
) -> ProcessUpdate {
    let mut builder = ProcessUpdateBuilder::new()
        .progress(progress)
        .expected_version(process.version);

    if progress.is_complete() {
        if process.status != ProcessStatus::Completed {
            builder = builder.status(ProcessStatus::Completed);
        }
        if process.completed_date.is_none() {
            builder = builder.completed_date(Some(now));
        }
    }

    builder.build()
}
