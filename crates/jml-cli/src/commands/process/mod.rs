mod check;
mod create;
mod delete;
mod get;
mod list;
mod recalc;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProcessCommands;
use crate::commands::shared::parse::parse_kind;
use crate::context::AppContext;

/// Handle `jml process`.
pub async fn handle(
    action: &ProcessCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProcessCommands::Create(args) => create::run(args, ctx, flags).await,
        ProcessCommands::Get { kind, id } => get::run(parse_kind(kind)?, *id, ctx, flags).await,
        ProcessCommands::List { kind, status } => {
            list::run(parse_kind(kind)?, status.as_deref(), ctx, flags).await
        }
        ProcessCommands::Delete { kind, id } => {
            delete::run(parse_kind(kind)?, *id, ctx, flags).await
        }
        ProcessCommands::Recalc { kind, id } => {
            recalc::run(parse_kind(kind)?, *id, ctx, flags).await
        }
        ProcessCommands::Check { kind, id } => check::run(parse_kind(kind)?, *id, ctx, flags).await,
    }
}
