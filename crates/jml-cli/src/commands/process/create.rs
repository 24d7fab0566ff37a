use anyhow::ensure;
use jml_core::entities::{NewProcess, NewTask, ProcessRecord, ProcessTask};
use jml_tracker::{ProcessStore, ProgressTracker};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CreateProcessArgs;
use crate::commands::shared::parse::{parse_date, parse_kind};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct CreatedProcess {
    process: ProcessRecord,
    tasks: Vec<ProcessTask>,
}

pub async fn run(
    args: &CreateProcessArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let kind = parse_kind(&args.kind)?;
    let new = new_process(args)?;

    let process = ctx.service.create_process(kind, &new).await?;
    let mut tasks = Vec::with_capacity(args.tasks.len());
    for (sort_order, title) in (0..).zip(&args.tasks) {
        let task = NewTask::titled(process.id, title.trim(), sort_order);
        tasks.push(ctx.service.create_task(kind, &task).await?);
    }

    let process = if tasks.is_empty() {
        process
    } else {
        with_fresh_counters(&ctx.tracker(kind), process).await
    };
    output(&CreatedProcess { process, tasks }, flags.format)
}

/// Recount a freshly created process. A failure only leaves the counters
/// stale; the process and its tasks are already saved.
async fn with_fresh_counters<S: ProcessStore>(
    tracker: &ProgressTracker<S>,
    process: ProcessRecord,
) -> ProcessRecord {
    if tracker.recalculate(process.id).await.is_none() {
        return process;
    }
    match tracker.store().get_process(process.id).await {
        Ok(Some(fresh)) => fresh,
        _ => process,
    }
}

fn new_process(args: &CreateProcessArgs) -> anyhow::Result<NewProcess> {
    ensure!(!args.title.trim().is_empty(), "title must not be empty");
    ensure!(!args.employee.trim().is_empty(), "employee name must not be empty");
    ensure!(
        args.email.contains('@'),
        "invalid email '{}': expected an address like name@example.com",
        args.email
    );
    ensure!(
        args.tasks.iter().all(|title| !title.trim().is_empty()),
        "task titles must not be empty"
    );

    Ok(NewProcess {
        title: args.title.trim().to_string(),
        employee_name: args.employee.trim().to_string(),
        employee_email: args.email.trim().to_string(),
        department: args.department.clone(),
        key_date: parse_date(&args.date, "date")?,
        notes: args.notes.clone(),
    })
}
