//! Core library entry for the `aido` CLI.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod duration;
pub mod oracle;
pub mod ports;
pub mod store;
pub mod task;

#[cfg(test)]
pub(crate) mod testutil;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub async fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli).await
}

#[cfg(test)]
mod tests {
    use super::run;

    fn temp_store(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join("aido_lib_tests");
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(format!("{name}.yaml"))
    }

    #[tokio::test]
    async fn run_executes_list() {
        let store = temp_store("run_executes_list");
        let result = run(["aido", "--store", store.to_str().unwrap(), "list"]).await;
        assert!(result.is_ok());
        let _ = std::fs::remove_file(&store);
    }

    #[tokio::test]
    async fn run_errors_on_unknown_subcommand() {
        let result = run(["aido", "unknown"]).await;
        assert!(result.is_err());
    }
}
