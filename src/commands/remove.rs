//! `aido rm` command.

use std::io::Write;

use crate::store::TaskStore;

/// Deletes a task and all its subtasks.
///
/// # Errors
///
/// Returns an error string if writing output fails.
pub fn run(store: &mut TaskStore<'_>, id: &str, out: &mut impl Write) -> Result<(), String> {
    if store.delete_task(id) {
        writeln!(out, "Removed [{id}].").map_err(|e| format!("write error: {e}"))
    } else {
        writeln!(out, "No task with id {id}.").map_err(|e| format!("write error: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TaskStore;
    use crate::testutil::test_context;
    use std::path::Path;

    #[test]
    fn removes_existing_task() {
        let ctx = test_context();
        let mut store = TaskStore::open(&ctx, Path::new("/store/tasks.yaml"));
        store.add_task("Buy milk");
        let id = store.tasks()[0].id.clone();

        let mut out = Vec::new();
        run(&mut store, &id, &mut out).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_id_reports_noop() {
        let ctx = test_context();
        let mut store = TaskStore::open(&ctx, Path::new("/store/tasks.yaml"));

        let mut out = Vec::new();
        run(&mut store, "missing", &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No task with id missing"));
    }
}
