mod add;
mod list;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::commands::shared::parse::parse_kind;
use crate::context::AppContext;

/// Handle `jml task`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskCommands::Add {
            kind,
            process,
            title,
            priority,
            due,
            category,
        } => {
            add::run(
                add::Params {
                    kind: parse_kind(kind)?,
                    process_id: *process,
                    title,
                    priority: priority.as_deref(),
                    due: due.as_deref(),
                    category: category.as_deref(),
                },
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::List { kind, process_id } => {
            list::run(parse_kind(kind)?, *process_id, ctx, flags).await
        }
        TaskCommands::Status { kind, id, status } => {
            status::run(parse_kind(kind)?, *id, status, ctx, flags).await
        }
    }
}
