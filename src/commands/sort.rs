//! `aido sort` command.

use std::io::Write;

use crate::store::{SortCriteria, TaskStore};

/// Reorders a task's subtasks by priority or estimated time.
///
/// # Errors
///
/// Returns an error string if writing output fails.
pub fn run(
    store: &mut TaskStore<'_>,
    id: &str,
    criteria: SortCriteria,
    out: &mut impl Write,
) -> Result<(), String> {
    if store.sort_subtasks(id, criteria) {
        let label = match criteria {
            SortCriteria::Priority => "priority",
            SortCriteria::Time => "time",
        };
        writeln!(out, "Sorted subtasks of [{id}] by {label}.")
            .map_err(|e| format!("write error: {e}"))
    } else {
        writeln!(out, "No task with id {id}.").map_err(|e| format!("write error: {e}"))
    }
}
