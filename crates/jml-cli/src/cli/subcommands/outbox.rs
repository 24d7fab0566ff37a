use clap::Subcommand;

/// Workflow outbox commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OutboxCommands {
    /// List queued completion workflows, oldest first.
    List,
}
