//! `aido breakdown` command.

use std::io::Write;

use super::list::render_subtask;
use crate::context::ServiceContext;
use crate::oracle;
use crate::store::TaskStore;

/// Asks the oracle to decompose a task and replaces its subtasks with
/// the drafts.
///
/// An empty draft list (the oracle's degraded fallback) leaves the task
/// untouched rather than wiping its existing subtasks.
///
/// # Errors
///
/// Returns an error string if writing output fails.
pub async fn run(
    ctx: &ServiceContext,
    store: &mut TaskStore<'_>,
    id: &str,
    out: &mut impl Write,
) -> Result<(), String> {
    let Some(task) = store.tasks().iter().find(|t| t.id == id) else {
        return writeln!(out, "No task with id {id}.").map_err(|e| format!("write error: {e}"));
    };
    let text = task.text.clone();

    let drafts = oracle::breakdown(ctx, &text).await;
    if drafts.is_empty() {
        return writeln!(out, "No breakdown available.").map_err(|e| format!("write error: {e}"));
    }

    let count = drafts.len();
    store.apply_breakdown(id, drafts);
    writeln!(out, "Broke [{id}] into {count} subtasks:").map_err(|e| format!("write error: {e}"))?;
    if let Some(task) = store.tasks().iter().find(|t| t.id == id) {
        for st in &task.sub_tasks {
            render_subtask(st, out)?;
        }
    }
    Ok(())
}
