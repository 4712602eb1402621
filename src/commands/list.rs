//! `aido list` command.

use std::io::Write;

use crate::store::TaskStore;
use crate::task::{SubTask, Task};

/// Renders the task list, most recent first, with a progress footer.
///
/// # Errors
///
/// Returns an error string if writing output fails.
pub fn run(store: &TaskStore<'_>, out: &mut impl Write) -> Result<(), String> {
    if store.is_empty() {
        return writeln!(out, "No tasks yet.").map_err(|e| format!("write error: {e}"));
    }

    for task in store.tasks() {
        render_task(task, out)?;
    }
    writeln!(out, "{} / {} done", store.completed_count(), store.len())
        .map_err(|e| format!("write error: {e}"))
}

fn render_task(task: &Task, out: &mut impl Write) -> Result<(), String> {
    let check = if task.completed { "x" } else { " " };
    let mut meta = task.priority.to_string();
    if let Some(time) = &task.estimated_time {
        meta.push_str(", ");
        meta.push_str(time);
    }
    if let Some(slot) = &task.suggested_slot {
        meta.push_str(" @ ");
        meta.push_str(slot);
    }
    writeln!(out, "[{check}] {} {} ({meta})", task.id, task.text)
        .map_err(|e| format!("write error: {e}"))?;

    if task.collapsed {
        if !task.sub_tasks.is_empty() {
            writeln!(out, "    ... {} subtasks hidden", task.sub_tasks.len())
                .map_err(|e| format!("write error: {e}"))?;
        }
        return Ok(());
    }
    for st in &task.sub_tasks {
        render_subtask(st, out)?;
    }
    Ok(())
}

pub(crate) fn render_subtask(st: &SubTask, out: &mut impl Write) -> Result<(), String> {
    let check = if st.completed { "x" } else { " " };
    let mut meta = st.effective_priority().to_string();
    if let Some(time) = &st.estimated_time {
        meta.push_str(", ");
        meta.push_str(time);
    }
    writeln!(out, "    [{check}] {} {} ({meta})", st.id, st.text)
        .map_err(|e| format!("write error: {e}"))
}
