//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::store::SortCriteria;
use crate::task::Priority;

/// Top-level CLI parser for `aido`.
#[derive(Debug, Parser)]
#[command(name = "aido", version, about = "AI-assisted task list")]
pub struct Cli {
    /// Path to the task store file (default: ~/.aido/tasks.yaml).
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new task.
    Add {
        /// Task description (words are joined with spaces).
        text: Vec<String>,
    },
    /// List all tasks, most recent first.
    List,
    /// Toggle a task's completion (cascades to its subtasks).
    Toggle {
        /// Id of the task.
        id: String,
    },
    /// Replace a task's text.
    Edit {
        /// Id of the task.
        id: String,
        /// New text (words are joined with spaces).
        text: Vec<String>,
    },
    /// Delete a task and all its subtasks.
    Rm {
        /// Id of the task.
        id: String,
    },
    /// Collapse or expand a task's subtasks in the listing.
    Collapse {
        /// Id of the task.
        id: String,
    },
    /// Manage a task's subtasks.
    #[command(subcommand)]
    Sub(SubCommand),
    /// Reorder a task's subtasks.
    Sort {
        /// Id of the task.
        id: String,
        /// Sort key.
        #[arg(value_enum)]
        by: SortKey,
    },
    /// Ask the AI oracle to break a task into subtasks.
    Breakdown {
        /// Id of the task.
        id: String,
    },
    /// Ask the AI oracle for priority/time/slot suggestions for all tasks.
    Schedule,
    /// Ask the AI oracle for a productivity summary of the list.
    Insights,
}

/// Subtask subcommands under `aido sub`.
#[derive(Debug, Subcommand)]
pub enum SubCommand {
    /// Add a subtask to a task.
    Add {
        /// Id of the owning task.
        task_id: String,
        /// Subtask description (words are joined with spaces).
        text: Vec<String>,
    },
    /// Toggle a subtask's completion.
    Toggle {
        /// Id of the owning task.
        task_id: String,
        /// Id of the subtask.
        sub_id: String,
    },
    /// Delete a subtask.
    Rm {
        /// Id of the owning task.
        task_id: String,
        /// Id of the subtask.
        sub_id: String,
    },
    /// Replace a subtask's text, priority and estimated time.
    Edit {
        /// Id of the owning task.
        task_id: String,
        /// Id of the subtask.
        sub_id: String,
        /// New text (words are joined with spaces).
        text: Vec<String>,
        /// New priority.
        #[arg(long, value_enum, default_value = "medium")]
        priority: PriorityArg,
        /// New estimated time label (e.g. "30m"); omit to clear.
        #[arg(long)]
        time: Option<String>,
    },
}

/// Sort key accepted by `aido sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// High priority first.
    Priority,
    /// Shortest estimated time first.
    Time,
}

impl From<SortKey> for SortCriteria {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Priority => SortCriteria::Priority,
            SortKey::Time => SortCriteria::Time,
        }
    }
}

/// Priority level accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    /// Can wait.
    Low,
    /// The default.
    Medium,
    /// Do first.
    High,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}
