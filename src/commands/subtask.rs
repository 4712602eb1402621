//! `aido sub` subcommands.

use std::io::Write;

use crate::cli::SubCommand;
use crate::store::TaskStore;

/// Dispatches one `aido sub` subcommand.
///
/// # Errors
///
/// Returns an error string if writing output fails.
pub fn run(
    store: &mut TaskStore<'_>,
    command: &SubCommand,
    out: &mut impl Write,
) -> Result<(), String> {
    match command {
        SubCommand::Add { task_id, text } => add(store, task_id, &text.join(" "), out),
        SubCommand::Toggle { task_id, sub_id } => toggle(store, task_id, sub_id, out),
        SubCommand::Rm { task_id, sub_id } => remove(store, task_id, sub_id, out),
        SubCommand::Edit { task_id, sub_id, text, priority, time } => edit(
            store,
            task_id,
            sub_id,
            &text.join(" "),
            (*priority).into(),
            time.clone(),
            out,
        ),
    }
}

fn add(
    store: &mut TaskStore<'_>,
    task_id: &str,
    text: &str,
    out: &mut impl Write,
) -> Result<(), String> {
    if text.trim().is_empty() {
        return writeln!(out, "Nothing added: subtask text is empty.")
            .map_err(|e| format!("write error: {e}"));
    }
    if store.add_subtask(task_id, text) {
        let task = store.tasks().iter().find(|t| t.id == task_id);
        if let Some(st) = task.and_then(|t| t.sub_tasks.last()) {
            return writeln!(out, "Added subtask [{}] {}", st.id, st.text)
                .map_err(|e| format!("write error: {e}"));
        }
        Ok(())
    } else {
        writeln!(out, "No task with id {task_id}.").map_err(|e| format!("write error: {e}"))
    }
}

fn toggle(
    store: &mut TaskStore<'_>,
    task_id: &str,
    sub_id: &str,
    out: &mut impl Write,
) -> Result<(), String> {
    if store.toggle_subtask(task_id, sub_id) {
        writeln!(out, "Toggled subtask [{sub_id}].").map_err(|e| format!("write error: {e}"))
    } else {
        writeln!(out, "No subtask {sub_id} under task {task_id}.")
            .map_err(|e| format!("write error: {e}"))
    }
}

fn remove(
    store: &mut TaskStore<'_>,
    task_id: &str,
    sub_id: &str,
    out: &mut impl Write,
) -> Result<(), String> {
    if store.delete_subtask(task_id, sub_id) {
        writeln!(out, "Removed subtask [{sub_id}].").map_err(|e| format!("write error: {e}"))
    } else {
        writeln!(out, "No subtask {sub_id} under task {task_id}.")
            .map_err(|e| format!("write error: {e}"))
    }
}

fn edit(
    store: &mut TaskStore<'_>,
    task_id: &str,
    sub_id: &str,
    text: &str,
    priority: crate::task::Priority,
    time: Option<String>,
    out: &mut impl Write,
) -> Result<(), String> {
    if text.trim().is_empty() {
        return writeln!(out, "Nothing changed: subtask text is empty.")
            .map_err(|e| format!("write error: {e}"));
    }
    if store.edit_subtask(task_id, sub_id, text, priority, time) {
        writeln!(out, "Updated subtask [{sub_id}].").map_err(|e| format!("write error: {e}"))
    } else {
        writeln!(out, "No subtask {sub_id} under task {task_id}.")
            .map_err(|e| format!("write error: {e}"))
    }
}
