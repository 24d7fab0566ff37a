use jml_core::enums::ProcessKind;
use jml_core::ids::{ItemId, validate_item_id};
use jml_db::error::DatabaseError;

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
    match ctx.service.delete_process(kind, id).await {
        Ok(()) => output(
            &serde_json::json!({ "process_type": kind, "process_id": id, "deleted": true }),
            flags.format,
        ),
        Err(DatabaseError::NoResult) => anyhow::bail!("{kind} {id} not found"),
        Err(error) => Err(error.into()),
    }
}
