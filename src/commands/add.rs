//! `aido add` command.

use std::io::Write;

use crate::store::TaskStore;

/// Adds a task with the given text, reporting the assigned id.
///
/// # Errors
///
/// Returns an error string if writing output fails.
pub fn run(store: &mut TaskStore<'_>, text: &str, out: &mut impl Write) -> Result<(), String> {
    if store.add_task(text) {
        let task = &store.tasks()[0];
        writeln!(out, "Added [{}] {}", task.id, task.text)
            .map_err(|e| format!("write error: {e}"))
    } else {
        writeln!(out, "Nothing added: task text is empty.")
            .map_err(|e| format!("write error: {e}"))
    }
}
