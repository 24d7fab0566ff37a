use clap::Subcommand;

use crate::cli::subcommands::{OutboxCommands, ProcessCommands, TaskCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Onboarding, mover, and offboarding records.
    Process {
        #[command(subcommand)]
        action: ProcessCommands,
    },
    /// Checklist tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Queued completion workflows.
    Outbox {
        #[command(subcommand)]
        action: OutboxCommands,
    },
}
