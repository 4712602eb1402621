//! `aido toggle` command.

use std::io::Write;

use crate::store::TaskStore;

/// Flips a task's completion, cascading to its subtasks.
///
/// # Errors
///
/// Returns an error string if writing output fails.
pub fn run(store: &mut TaskStore<'_>, id: &str, out: &mut impl Write) -> Result<(), String> {
    if store.toggle_task(id) {
        let state = store.tasks().iter().find(|t| t.id == id).is_some_and(|t| t.completed);
        writeln!(out, "[{}] is now {}.", id, if state { "done" } else { "pending" })
            .map_err(|e| format!("write error: {e}"))
    } else {
        writeln!(out, "No task with id {id}.").map_err(|e| format!("write error: {e}"))
    }
}
