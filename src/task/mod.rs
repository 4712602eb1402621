//! Task and subtask model types.
//!
//! `Task` is a top-level to-do item; `SubTask` is a child item scoped to
//! its owning task. `SubtaskDraft` and `ScheduleSuggestion` are the value
//! types the oracle hands back for the store to merge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Priority level of a task or subtask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// The default when nothing else is known.
    #[default]
    Medium,
    /// Do first.
    High,
}

impl Priority {
    /// Ascending sort weight: high sorts first.
    #[must_use]
    pub fn weight(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// Parses a lowercase label (`"low"`, `"medium"`, `"high"`).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        f.write_str(label)
    }
}

/// A child item of a task, independently completable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTask {
    /// Opaque unique identifier, immutable after creation.
    pub id: String,
    /// Non-empty display text.
    pub text: String,
    /// Completion flag, independently toggleable.
    pub completed: bool,
    /// Optional priority; treated as medium when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Optional free-text duration label (e.g. `"30m"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
}

impl SubTask {
    /// Creates an incomplete medium-priority subtask.
    #[must_use]
    pub fn new(id: String, text: String) -> Self {
        Self { id, text, completed: false, priority: Some(Priority::Medium), estimated_time: None }
    }

    /// The priority used for sorting and weighting (medium when unset).
    #[must_use]
    pub fn effective_priority(&self) -> Priority {
        self.priority.unwrap_or_default()
    }
}

/// A top-level to-do item, optionally decomposed into subtasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier, immutable after creation.
    pub id: String,
    /// Non-empty display text.
    pub text: String,
    /// True iff the task (and, when present, every subtask) is done.
    pub completed: bool,
    /// Priority, defaulting to medium.
    #[serde(default)]
    pub priority: Priority,
    /// Optional free-text duration label supplied by the oracle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    /// Optional free-text schedule label supplied by the oracle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_slot: Option<String>,
    /// Creation timestamp, display/sort use only.
    pub created_at: DateTime<Utc>,
    /// Display flag: subtasks hidden when true.
    #[serde(default)]
    pub collapsed: bool,
    /// Child items in insertion order; may be empty.
    #[serde(default)]
    pub sub_tasks: Vec<SubTask>,
}

impl Task {
    /// Creates an incomplete medium-priority task with no subtasks.
    #[must_use]
    pub fn new(id: String, text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            completed: false,
            priority: Priority::Medium,
            estimated_time: None,
            suggested_slot: None,
            created_at,
            collapsed: false,
            sub_tasks: Vec::new(),
        }
    }

    /// Recomputes the derived completion flag after a subtask change.
    ///
    /// With a non-empty subtask list, `completed` becomes "all subtasks
    /// done". With an empty list the current value is preserved — the
    /// user's direct completion state is whatever it last was.
    pub fn recompute_completed(&mut self) {
        if !self.sub_tasks.is_empty() {
            self.completed = self.sub_tasks.iter().all(|st| st.completed);
        }
    }
}

/// A subtask proposed by the oracle's breakdown operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtaskDraft {
    /// Display text for the new subtask.
    pub text: String,
    /// Proposed priority.
    pub priority: Priority,
    /// Short free-text duration estimate (e.g. `"15m"`).
    pub estimated_time: String,
}

/// A per-task suggestion from the oracle's scheduling operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSuggestion {
    /// Id of the task the suggestion applies to.
    pub id: String,
    /// Suggested priority.
    pub priority: Priority,
    /// Suggested free-text duration label.
    pub estimated_time: String,
    /// Suggested free-text time slot.
    pub suggested_slot: String,
}
