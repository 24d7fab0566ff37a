use jml_core::enums::ProcessKind;
use jml_core::ids::ItemId;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Unlike the recalculation behind `task status`, failures here are reported.
pub async fn run(
    kind: ProcessKind,
    id: ItemId,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let outcome = ctx.tracker(kind).try_recalculate(id).await?;
    output(&outcome, flags.format)
}
