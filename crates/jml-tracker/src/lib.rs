//! # jml-tracker
//!
//! Progress recalculation and completion protocol for JML processes.
//!
//! The protocol is written once against two capabilities:
//! - [`ProcessStore`]: read tasks, read and write the process record of one
//!   process kind
//! - [`WorkflowNotifier`]: deliver the one-time completion workflow
//!
//! [`ProgressTracker`] drives them:
//! 1. `recalculate` recounts all tasks and writes counters (and the forced
//!    `completed` status) in one version-guarded write
//! 2. `check_completion` delivers the completion workflow at most once
//! 3. `apply_task_status` chains a task status change into 1 and 2

pub mod error;
pub mod notify;
pub mod recalc;
pub mod retry;
pub mod store;
mod tracker;

pub use error::{NotifyError, StoreError, TrackerError};
pub use notify::{LogNotifier, WorkflowNotifier};
pub use retry::RetryPolicy;
pub use store::ProcessStore;
pub use tracker::ProgressTracker;
