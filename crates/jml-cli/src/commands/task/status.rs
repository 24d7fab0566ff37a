use jml_core::enums::{ProcessKind, TaskStatus};
use jml_core::ids::ItemId;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    kind: ProcessKind,
    id: ItemId,
    status: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = parse_enum::<TaskStatus>(status, "status")?;
    let outcome = ctx.tracker(kind).apply_task_status(id, status).await?;
    output(&outcome, flags.format)
}
