//! `aido collapse` command.

use std::io::Write;

use crate::store::TaskStore;

/// Flips a task's collapsed display flag.
///
/// # Errors
///
/// Returns an error string if writing output fails.
pub fn run(store: &mut TaskStore<'_>, id: &str, out: &mut impl Write) -> Result<(), String> {
    if store.toggle_collapse(id) {
        let collapsed = store.tasks().iter().find(|t| t.id == id).is_some_and(|t| t.collapsed);
        writeln!(out, "[{}] is now {}.", id, if collapsed { "collapsed" } else { "expanded" })
            .map_err(|e| format!("write error: {e}"))
    } else {
        writeln!(out, "No task with id {id}.").map_err(|e| format!("write error: {e}"))
    }
}
