use jml_core::enums::ProcessKind;
use jml_core::ids::{ItemId, validate_item_id};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    kind: ProcessKind,
    id: ItemId,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let id = validate_item_id(id)?;
    let Some(process) = ctx.service.find_process(kind, id).await? else {
        anyhow::bail!("{kind} {id} not found");
    };
    output(&process, flags.format)
}
