use clap::{Args, Subcommand};

/// Process record commands. `KIND` is onboarding, mover, or offboarding.
#[derive(Clone, Debug, Subcommand)]
pub enum ProcessCommands {
    /// Create a process record, optionally with an initial checklist.
    Create(CreateProcessArgs),
    /// Get a process record by ID.
    Get { kind: String, id: i64 },
    /// List process records of one kind.
    List {
        kind: String,
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete a process record and its tasks.
    Delete { kind: String, id: i64 },
    /// Recount tasks and store progress.
    Recalc { kind: String, id: i64 },
    /// Send the completion workflow if the process is complete.
    Check { kind: String, id: i64 },
}

#[derive(Clone, Debug, Args)]
pub struct CreateProcessArgs {
    #[arg(long)]
    pub kind: String,
    #[arg(long)]
    pub title: String,
    /// Employee display name
    #[arg(long)]
    pub employee: String,
    #[arg(long)]
    pub email: String,
    /// Start, effective, or last working date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,
    #[arg(long)]
    pub department: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Checklist item title; repeat for several
    #[arg(long = "task")]
    pub tasks: Vec<String>,
}
