//! Partial update payloads for process records and tasks.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are written by a store. Nullable columns use `Option<Option<T>>`
//! so `Some(None)` clears the value.

pub mod process;
pub mod task;
