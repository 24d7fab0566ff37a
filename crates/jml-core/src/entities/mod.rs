//! Entity structs for JML domain objects.
//!
//! Each process kind maps to a pair of tables in the libSQL database (a
//! process table and a task table). The structs are shared across kinds and
//! carry their `ProcessKind` explicitly.

mod outbox;
mod process;
mod task;

pub use outbox::WorkflowOutboxEntry;
pub use process::{NewProcess, ProcessRecord};
pub use task::{NewTask, ProcessTask};
