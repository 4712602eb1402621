//! `aido edit` command.

use std::io::Write;

use crate::store::TaskStore;

/// Replaces a task's text; blank replacements are discarded.
///
/// # Errors
///
/// Returns an error string if writing output fails.
pub fn run(
    store: &mut TaskStore<'_>,
    id: &str,
    text: &str,
    out: &mut impl Write,
) -> Result<(), String> {
    if text.trim().is_empty() {
        return writeln!(out, "Nothing changed: new text is empty.")
            .map_err(|e| format!("write error: {e}"));
    }
    if store.edit_task_text(id, text) {
        writeln!(out, "Updated [{id}].").map_err(|e| format!("write error: {e}"))
    } else {
        writeln!(out, "No task with id {id}.").map_err(|e| format!("write error: {e}"))
    }
}
