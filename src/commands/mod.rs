//! Command dispatch and handlers.

pub mod add;
pub mod breakdown;
pub mod collapse;
pub mod edit;
pub mod insights;
pub mod list;
pub mod remove;
pub mod schedule;
pub mod sort;
pub mod subtask;
pub mod toggle;

use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, Command};
use crate::context::ServiceContext;
use crate::store::TaskStore;

/// Dispatch a parsed command against the live context and store.
///
/// # Errors
///
/// Returns an error string if the store path cannot be resolved or the
/// selected command handler fails.
pub async fn dispatch(cli: &Cli) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let path = resolve_store_path(cli.store.as_deref())?;
    let mut store = TaskStore::open(&ctx, &path);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_command(&ctx, &mut store, &cli.command, &mut out).await
}

/// Dispatch a command against a caller-provided context and store.
async fn run_command(
    ctx: &ServiceContext,
    store: &mut TaskStore<'_>,
    command: &Command,
    out: &mut impl Write,
) -> Result<(), String> {
    match command {
        Command::Add { text } => add::run(store, &text.join(" "), out),
        Command::List => list::run(store, out),
        Command::Toggle { id } => toggle::run(store, id, out),
        Command::Edit { id, text } => edit::run(store, id, &text.join(" "), out),
        Command::Rm { id } => remove::run(store, id, out),
        Command::Collapse { id } => collapse::run(store, id, out),
        Command::Sub(sub) => subtask::run(store, sub, out),
        Command::Sort { id, by } => sort::run(store, id, (*by).into(), out),
        Command::Breakdown { id } => breakdown::run(ctx, store, id, out).await,
        Command::Schedule => schedule::run(ctx, store, out).await,
        Command::Insights => insights::run(ctx, store, out).await,
    }
}

/// Resolves the store blob path: `--store` flag, else `~/.aido/tasks.yaml`.
fn resolve_store_path(flag: Option<&Path>) -> Result<PathBuf, String> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    let home = env::var_os("HOME")
        .ok_or_else(|| "HOME is not set; pass --store <path>".to_string())?;
    Ok(PathBuf::from(home).join(".aido").join("tasks.yaml"))
}
