use clap::Subcommand;

/// Checklist task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Add a task to a process checklist.
    Add {
        kind: String,
        #[arg(long)]
        process: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        priority: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// List a process's tasks in checklist order.
    List { kind: String, process_id: i64 },
    /// Change a task's status and update the process's progress.
    Status {
        kind: String,
        id: i64,
        status: String,
    },
}
