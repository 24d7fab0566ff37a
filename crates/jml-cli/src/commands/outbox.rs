use crate::cli::GlobalFlags;
use crate::cli::subcommands::OutboxCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `jml outbox`.
pub async fn handle(
    action: &OutboxCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        OutboxCommands::List => {
            let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
            let entries = ctx.service.list_outbox(limit).await?;
            output(&entries, flags.format)
        }
    }
}
