//! `aido schedule` command.

use std::io::Write;

use crate::context::ServiceContext;
use crate::oracle;
use crate::store::TaskStore;

/// Asks the oracle for schedule suggestions and merges them by task id.
///
/// An empty store skips the oracle entirely.
///
/// # Errors
///
/// Returns an error string if writing output fails.
pub async fn run(
    ctx: &ServiceContext,
    store: &mut TaskStore<'_>,
    out: &mut impl Write,
) -> Result<(), String> {
    if store.is_empty() {
        return writeln!(out, "No tasks to schedule.").map_err(|e| format!("write error: {e}"));
    }

    let suggestions = oracle::suggest_schedule(ctx, store.tasks()).await;
    if suggestions.is_empty() {
        return writeln!(out, "No schedule suggestions available.")
            .map_err(|e| format!("write error: {e}"));
    }

    if store.apply_schedule_suggestions(&suggestions) {
        writeln!(out, "Schedule suggestions applied.").map_err(|e| format!("write error: {e}"))
    } else {
        writeln!(out, "No suggestions matched current tasks.")
            .map_err(|e| format!("write error: {e}"))
    }
}
