//! `aido insights` command.

use std::io::Write;

use crate::context::ServiceContext;
use crate::oracle;
use crate::store::TaskStore;

/// Prints the oracle's productivity summary, or a fallback line when the
/// oracle is unavailable.
///
/// # Errors
///
/// Returns an error string if writing output fails.
pub async fn run(
    ctx: &ServiceContext,
    store: &mut TaskStore<'_>,
    out: &mut impl Write,
) -> Result<(), String> {
    match oracle::project_insights(ctx, store.tasks()).await {
        Some(text) => writeln!(out, "{text}").map_err(|e| format!("write error: {e}")),
        None => writeln!(out, "No insights available.").map_err(|e| format!("write error: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TaskStore;
    use crate::testutil::test_context_with_llm;
    use std::path::Path;

    #[tokio::test]
    async fn prints_oracle_summary() {
        let ctx = test_context_with_llm(vec![Ok("You are on track. Tip: batch errands.".into())]);
        let mut store = TaskStore::open(&ctx, Path::new("/store/tasks.yaml"));
        store.add_task("Buy milk");

        let mut out = Vec::new();
        run(&ctx, &mut store, &mut out).await.unwrap();
        assert!(String::from_utf8(out).unwrap().contains("You are on track"));
    }

    #[tokio::test]
    async fn prints_fallback_when_oracle_fails() {
        let ctx = test_context_with_llm(vec![Err("no api key".into())]);
        let mut store = TaskStore::open(&ctx, Path::new("/store/tasks.yaml"));

        let mut out = Vec::new();
        run(&ctx, &mut store, &mut out).await.unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No insights available"));
    }
}
