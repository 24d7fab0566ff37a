use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `jml` binary.
#[derive(Debug, Parser)]
#[command(
    name = "jml",
    version,
    about = "Joiner, mover, and leaver checklists with automatic progress tracking"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database path, overriding `database.path` from config
    #[arg(long, global = true)]
    pub db: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            db: self.db.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{OutboxCommands, ProcessCommands, TaskCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "jml",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "outbox",
            "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Outbox {
                action: OutboxCommands::List
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "jml", "process", "get", "mover", "4", "--format", "raw", "--db", "/tmp/x.db",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert_eq!(cli.global_flags().db.as_deref(), Some("/tmp/x.db"));
        match cli.command {
            Commands::Process {
                action: ProcessCommands::Get { kind, id },
            } => {
                assert_eq!(kind, "mover");
                assert_eq!(id, 4);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["jml", "--format", "xml", "outbox", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn create_collects_repeated_tasks() {
        let cli = Cli::try_parse_from([
            "jml",
            "process",
            "create",
            "--kind",
            "onboarding",
            "--title",
            "New starter",
            "--employee",
            "Ana Silva",
            "--email",
            "ana@example.com",
            "--date",
            "2026-11-02",
            "--task",
            "Laptop",
            "--task",
            "Badge",
        ])
        .expect("cli should parse");

        match cli.command {
            Commands::Process {
                action: ProcessCommands::Create(args),
            } => {
                assert_eq!(args.tasks, ["Laptop", "Badge"]);
                assert_eq!(args.department, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn task_status_takes_positional_args() {
        let cli = Cli::try_parse_from(["jml", "task", "status", "offboarding", "12", "completed"])
            .expect("cli should parse");
        match cli.command {
            Commands::Task {
                action: TaskCommands::Status { kind, id, status },
            } => {
                assert_eq!(kind, "offboarding");
                assert_eq!(id, 12);
                assert_eq!(status, "completed");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        assert!(Cli::try_parse_from(["jml", "process", "recalc", "mover", "abc"]).is_err());
    }
}
