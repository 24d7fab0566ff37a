use anyhow::ensure;
use jml_core::entities::NewTask;
use jml_core::enums::{ProcessKind, TaskPriority};
use jml_core::ids::{ItemId, validate_item_id};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Params<'a> {
    pub kind: ProcessKind,
    pub process_id: ItemId,
    pub title: &'a str,
    pub priority: Option<&'a str>,
    pub due: Option<&'a str>,
    pub category: Option<&'a str>,
}

/// Append a task to the checklist; the process's counters follow.
pub async fn run(params: Params<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = params.kind;
    let process_id = validate_item_id(params.process_id)?;
    ensure!(!params.title.trim().is_empty(), "title must not be empty");

    if ctx.service.find_process(kind, process_id).await?.is_none() {
        anyhow::bail!("{kind} {process_id} not found");
    }

    let priority = params
        .priority
        .map(|raw| parse_enum::<TaskPriority>(raw, "priority"))
        .transpose()?
        .unwrap_or_default();
    let due_date = params.due.map(|raw| parse_date(raw, "due date")).transpose()?;
    let sort_order = ctx.service.next_sort_order(kind, process_id).await?;

    let new = NewTask {
        category: params.category.map(String::from),
        priority,
        due_date,
        ..NewTask::titled(process_id, params.title.trim(), sort_order)
    };
    let task = ctx.service.create_task(kind, &new).await?;

    // A new pending task lowers the percentage; a failure here only leaves it stale.
    ctx.tracker(kind).recalculate(process_id).await;

    output(&task, flags.format)
}
