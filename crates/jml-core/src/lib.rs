//! # jml-core
//!
//! Core types, progress arithmetic, and error types for JML process tracking.
//!
//! This crate provides the foundational types shared across all JML crates:
//! - Entity structs for process records and their tasks
//! - Process kind, process status, task status and priority enums
//! - Completion percentage arithmetic shared by every process kind
//! - Partial update payloads for process records and tasks
//! - Response types for recalculation and completion checks
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod progress;
pub mod responses;
pub mod updates;
