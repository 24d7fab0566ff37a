use jml_core::enums::{ProcessKind, ProcessStatus};

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    kind: ProcessKind,
    status: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = status
        .map(|raw| parse_enum::<ProcessStatus>(raw, "status"))
        .transpose()?;
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let processes = ctx.service.list_processes(kind, status, limit).await?;
    output(&processes, flags.format)
}
