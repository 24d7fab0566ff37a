use jml_core::enums::ProcessKind;
use jml_core::ids::{ItemId, validate_item_id};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    kind: ProcessKind,
    process_id: ItemId,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let process_id = validate_item_id(process_id)?;
    if ctx.service.find_process(kind, process_id).await?.is_none() {
        anyhow::bail!("{kind} {process_id} not found");
    }
    let tasks = ctx.service.list_tasks(kind, process_id).await?;
    output(&tasks, flags.format)
}
