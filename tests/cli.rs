//! Integration tests for top-level CLI behavior.
//!
//! Each test runs the compiled binary against its own temp-dir store.
//! Oracle-backed commands are only exercised on their offline degradation
//! paths (no API key), which must still exit successfully.

use std::path::{Path, PathBuf};
use std::process::Command;

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("aido_cli_tests").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("failed to create test dir");
    dir
}

fn run_aido(dir: &Path, args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_aido");
    let store = dir.join("tasks.yaml");
    Command::new(bin)
        .arg("--store")
        .arg(&store)
        .args(args)
        // Keep the oracle unreachable and stop dotenvy from finding a
        // project .env file.
        .current_dir(dir)
        .env_remove("ANTHROPIC_API_KEY")
        .output()
        .expect("failed to run aido binary")
}

/// Extracts the first `[id]` printed by `add`.
fn added_id(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let start = stdout.find('[').expect("no id in output") + 1;
    let end = stdout.find(']').expect("no id in output");
    stdout[start..end].to_string()
}

#[test]
fn add_then_list_shows_task() {
    let dir = test_dir("add_then_list");

    let output = run_aido(&dir, &["add", "Buy", "milk"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Buy milk"));

    // Separate invocation: the blob must have persisted.
    let output = run_aido(&dir, &["list"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Buy milk"));
    assert!(stdout.contains("0 / 1 done"));
}

#[test]
fn whitespace_only_add_changes_nothing() {
    let dir = test_dir("whitespace_add");

    let output = run_aido(&dir, &["add", "   "]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Nothing added"));

    let output = run_aido(&dir, &["list"]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("No tasks yet"));
}

#[test]
fn toggle_marks_task_done() {
    let dir = test_dir("toggle_done");

    let output = run_aido(&dir, &["add", "Buy milk"]);
    let id = added_id(&output);

    let output = run_aido(&dir, &["toggle", &id]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("now done"));

    let output = run_aido(&dir, &["list"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[x]"));
    assert!(stdout.contains("1 / 1 done"));
}

#[test]
fn rm_removes_task() {
    let dir = test_dir("rm_removes");

    let output = run_aido(&dir, &["add", "Buy milk"]);
    let id = added_id(&output);

    let output = run_aido(&dir, &["rm", &id]);
    assert!(output.status.success());

    let output = run_aido(&dir, &["list"]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("No tasks yet"));
}

#[test]
fn unknown_id_is_a_successful_noop() {
    let dir = test_dir("unknown_id");

    let output = run_aido(&dir, &["toggle", "no-such-id"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No task with id"));
}

#[test]
fn subtask_flow_completes_parent() {
    let dir = test_dir("subtask_flow");

    let output = run_aido(&dir, &["add", "Plan trip"]);
    let task_id = added_id(&output);

    let output = run_aido(&dir, &["sub", "add", &task_id, "book", "flights"]);
    assert!(output.status.success());
    let sub_id = added_id(&output);

    let output = run_aido(&dir, &["sub", "toggle", &task_id, &sub_id]);
    assert!(output.status.success());

    // The only subtask is done, so the parent derives done.
    let output = run_aido(&dir, &["list"]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("1 / 1 done"));
}

#[test]
fn schedule_with_empty_store_is_noop() {
    let dir = test_dir("schedule_empty");

    let output = run_aido(&dir, &["schedule"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No tasks to schedule"));
}

#[test]
fn insights_without_api_key_prints_fallback() {
    let dir = test_dir("insights_offline");

    let output = run_aido(&dir, &["insights"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No insights available"));
}

#[test]
fn breakdown_without_api_key_keeps_task_intact() {
    let dir = test_dir("breakdown_offline");

    let output = run_aido(&dir, &["add", "Plan trip"]);
    let id = added_id(&output);

    let output = run_aido(&dir, &["breakdown", &id]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No breakdown available"));

    let output = run_aido(&dir, &["list"]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Plan trip"));
}

#[test]
fn corrupt_store_starts_empty_without_crashing() {
    let dir = test_dir("corrupt_store");
    std::fs::write(dir.join("tasks.yaml"), "{{{ not yaml [").unwrap();

    let output = run_aido(&dir, &["list"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No tasks yet"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let dir = test_dir("invalid_subcommand");

    let output = run_aido(&dir, &["nonsense"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unrecognized subcommand"));
}
