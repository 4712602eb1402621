//! Task store — the authoritative in-memory collection and its blob.
//!
//! The store owns every task, applies all mutations, and mirrors the
//! whole collection to one YAML file through the `FileSystem` port after
//! each effective change. Mutators are total: invalid ids and empty text
//! are no-ops reported through the returned `bool`, never errors. A
//! missing or corrupt blob at startup yields an empty collection.

use std::path::{Path, PathBuf};

use crate::context::ServiceContext;
use crate::duration::parse_duration;
use crate::task::{Priority, ScheduleSuggestion, SubTask, SubtaskDraft, Task};

/// Sort criteria for [`TaskStore::sort_subtasks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriteria {
    /// Order by priority weight, high first.
    Priority,
    /// Order by parsed duration, shortest first; unknown durations last.
    Time,
}

/// Owns the task collection and persists it after every mutation.
pub struct TaskStore<'a> {
    ctx: &'a ServiceContext,
    path: PathBuf,
    tasks: Vec<Task>,
}

impl<'a> TaskStore<'a> {
    /// Opens the store at the given blob path.
    ///
    /// A missing blob yields an empty collection; a corrupt one is logged
    /// and likewise yields an empty collection — startup never fails.
    #[must_use]
    pub fn open(ctx: &'a ServiceContext, path: &Path) -> Self {
        let tasks = load_tasks(ctx, path);
        Self { ctx, path: path.to_path_buf(), tasks }
    }

    /// The current collection, most recently added first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when the collection holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of completed tasks, for the progress footer and insights.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Prepends a new incomplete medium-priority task.
    ///
    /// Whitespace-only text is a no-op.
    pub fn add_task(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let task = Task::new(
            self.ctx.id_gen.generate_id(),
            text.to_string(),
            self.ctx.clock.now(),
        );
        self.tasks.insert(0, task);
        self.persist();
        true
    }

    /// Removes a task (and with it all its subtasks).
    pub fn delete_task(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Flips a task's completion, cascading the new value to every subtask.
    pub fn toggle_task(&mut self, id: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        let completed = !task.completed;
        task.completed = completed;
        for st in &mut task.sub_tasks {
            st.completed = completed;
        }
        self.persist();
        true
    }

    /// Replaces a task's text; whitespace-only replacements are discarded.
    pub fn edit_task_text(&mut self, id: &str, new_text: &str) -> bool {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return false;
        }
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.text = new_text.to_string();
        self.persist();
        true
    }

    /// Flips a task's collapsed display flag. No cascading effects.
    pub fn toggle_collapse(&mut self, id: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.collapsed = !task.collapsed;
        self.persist();
        true
    }

    /// Appends a new incomplete medium-priority subtask.
    ///
    /// The parent becomes incomplete and is expanded so the new item is
    /// visible. Whitespace-only text or an unknown task id is a no-op.
    pub fn add_subtask(&mut self, task_id: &str, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let id = self.ctx.id_gen.generate_id();
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) else {
            return false;
        };
        task.sub_tasks.push(SubTask::new(id, text.to_string()));
        task.completed = false;
        task.collapsed = false;
        self.persist();
        true
    }

    /// Removes a subtask and recomputes the parent's completion.
    ///
    /// When the last subtask goes away the parent keeps its current
    /// completion value.
    pub fn delete_subtask(&mut self, task_id: &str, subtask_id: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) else {
            return false;
        };
        let before = task.sub_tasks.len();
        task.sub_tasks.retain(|st| st.id != subtask_id);
        if task.sub_tasks.len() == before {
            return false;
        }
        task.recompute_completed();
        self.persist();
        true
    }

    /// Flips one subtask's completion and recomputes the parent's.
    pub fn toggle_subtask(&mut self, task_id: &str, subtask_id: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) else {
            return false;
        };
        let Some(st) = task.sub_tasks.iter_mut().find(|st| st.id == subtask_id) else {
            return false;
        };
        st.completed = !st.completed;
        task.recompute_completed();
        self.persist();
        true
    }

    /// Applies text, priority and estimated time to a subtask atomically.
    ///
    /// Whitespace-only text discards the whole edit.
    pub fn edit_subtask(
        &mut self,
        task_id: &str,
        subtask_id: &str,
        text: &str,
        priority: Priority,
        estimated_time: Option<String>,
    ) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) else {
            return false;
        };
        let Some(st) = task.sub_tasks.iter_mut().find(|st| st.id == subtask_id) else {
            return false;
        };
        st.text = text.to_string();
        st.priority = Some(priority);
        st.estimated_time = estimated_time;
        self.persist();
        true
    }

    /// Reorders a task's subtasks in place. The sort is stable.
    pub fn sort_subtasks(&mut self, task_id: &str, criteria: SortCriteria) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) else {
            return false;
        };
        match criteria {
            SortCriteria::Priority => {
                task.sub_tasks.sort_by_key(|st| st.effective_priority().weight());
            }
            SortCriteria::Time => {
                task.sub_tasks.sort_by_key(|st| parse_duration(st.estimated_time.as_deref()));
            }
        }
        self.persist();
        true
    }

    /// Replaces a task's subtasks wholesale with oracle-drafted ones.
    ///
    /// Every draft gets a fresh id and starts incomplete; the parent
    /// becomes incomplete and expanded.
    pub fn apply_breakdown(&mut self, task_id: &str, drafts: Vec<SubtaskDraft>) -> bool {
        let sub_tasks: Vec<SubTask> = drafts
            .into_iter()
            .map(|draft| SubTask {
                id: self.ctx.id_gen.generate_id(),
                text: draft.text,
                completed: false,
                priority: Some(draft.priority),
                estimated_time: Some(draft.estimated_time),
            })
            .collect();
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) else {
            return false;
        };
        task.sub_tasks = sub_tasks;
        task.completed = false;
        task.collapsed = false;
        self.persist();
        true
    }

    /// Merges schedule suggestions over the collection, matched by id.
    ///
    /// Tasks without a matching suggestion are untouched; suggestions for
    /// unknown ids are dropped.
    pub fn apply_schedule_suggestions(&mut self, suggestions: &[ScheduleSuggestion]) -> bool {
        let mut changed = false;
        for suggestion in suggestions {
            if let Some(task) = self.tasks.iter_mut().find(|t| t.id == suggestion.id) {
                task.priority = suggestion.priority;
                task.estimated_time = Some(suggestion.estimated_time.clone());
                task.suggested_slot = Some(suggestion.suggested_slot.clone());
                changed = true;
            }
        }
        if changed {
            self.persist();
        }
        changed
    }

    /// Mirrors the collection to the blob. Best-effort: failures are
    /// logged and otherwise ignored.
    fn persist(&self) {
        let yaml = match serde_yaml::to_string(&self.tasks) {
            Ok(yaml) => yaml,
            Err(error) => {
                tracing::warn!(%error, "failed to serialize task collection");
                return;
            }
        };
        if let Err(error) = self.ctx.fs.write(&self.path, &yaml) {
            tracing::warn!(%error, path = %self.path.display(), "failed to persist task blob");
        }
    }
}

/// Loads the persisted collection, degrading to empty on any failure.
fn load_tasks(ctx: &ServiceContext, path: &Path) -> Vec<Task> {
    if !ctx.fs.exists(path) {
        return Vec::new();
    }
    let contents = match ctx.fs.read_to_string(path) {
        Ok(contents) => contents,
        Err(error) => {
            tracing::warn!(%error, path = %path.display(), "failed to read task blob");
            return Vec::new();
        }
    };
    match serde_yaml::from_str(&contents) {
        Ok(tasks) => tasks,
        Err(error) => {
            tracing::warn!(%error, path = %path.display(), "corrupt task blob, starting empty");
            Vec::new()
        }
    }
}
