//! Edit Session
//!
//! State machine over one task draft, instantiated per visit to the task
//! screen. Mutations act on a working copy only; nothing touches the store
//! until a terminal action hands the draft to the injected save callback.
//!
//! Progress is recomputed from the sub-task list whenever it changes, except
//! that a task left with zero sub-tasks keeps its current progress. Title
//! edits never trigger recomputation.

use std::future::Future;

use crate::models::{generate_id, SubTask, Task};

/// Round(100 * completed / total); 0 for an empty list.
pub fn completion_percentage(sub_tasks: &[SubTask]) -> u8 {
    let total = sub_tasks.len();
    if total == 0 {
        return 0;
    }
    let completed = sub_tasks.iter().filter(|s| s.completed).count();
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

/// Partial sub-task update, the fields a row editor can change
#[derive(Debug, Clone, Default)]
pub struct SubTaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
struct Draft {
    task: Task,
    edited_title: String,
}

/// Per-visit editing state: uninitialized until an initial task arrives,
/// editing from then on. Mutations before initialization are ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditSession {
    draft: Option<Draft>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a deep working copy of the initial task and start editing.
    pub fn begin(&mut self, task: &Task) {
        self.draft = Some(Draft {
            edited_title: task.title.clone(),
            task: task.clone(),
        });
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// The working copy, if editing has started
    pub fn draft(&self) -> Option<&Task> {
        self.draft.as_ref().map(|d| &d.task)
    }

    pub fn edited_title(&self) -> &str {
        self.draft.as_ref().map(|d| d.edited_title.as_str()).unwrap_or("")
    }

    pub fn sub_tasks(&self) -> &[SubTask] {
        self.draft.as_ref().map(|d| d.task.sub_tasks.as_slice()).unwrap_or(&[])
    }

    /// Look up one sub-task of the working copy by id.
    pub fn sub_task(&self, sub_task_id: &str) -> Option<&SubTask> {
        self.sub_tasks().iter().find(|s| s.id == sub_task_id)
    }

    fn draft_mut(&mut self) -> Option<&mut Draft> {
        self.draft.as_mut()
    }

    /// Recompute progress unless the sub-task list is empty, in which case
    /// the task keeps whatever progress it already had.
    fn refresh_progress(task: &mut Task) {
        if !task.sub_tasks.is_empty() {
            task.progress = completion_percentage(&task.sub_tasks);
        }
    }

    /// The title lives in its own buffer until save merges it back.
    pub fn set_title(&mut self, title: &str) {
        if let Some(draft) = self.draft_mut() {
            draft.edited_title = title.to_string();
        }
    }

    pub fn set_category(&mut self, category: &str, icon: &str) {
        if let Some(draft) = self.draft_mut() {
            draft.task.category = category.to_string();
            draft.task.icon = icon.to_string();
        }
    }

    pub fn toggle_sub_task(&mut self, sub_task_id: &str) {
        if let Some(draft) = self.draft_mut() {
            if let Some(sub) = draft.task.sub_tasks.iter_mut().find(|s| s.id == sub_task_id) {
                sub.completed = !sub.completed;
            }
            Self::refresh_progress(&mut draft.task);
        }
    }

    pub fn update_sub_task(&mut self, sub_task_id: &str, patch: SubTaskPatch) {
        if let Some(draft) = self.draft_mut() {
            let completion_changed = patch.completed.is_some();
            if let Some(sub) = draft.task.sub_tasks.iter_mut().find(|s| s.id == sub_task_id) {
                if let Some(title) = patch.title {
                    sub.title = title;
                }
                if let Some(description) = patch.description {
                    sub.description = description;
                }
                if let Some(completed) = patch.completed {
                    sub.completed = completed;
                }
            }
            if completion_changed {
                Self::refresh_progress(&mut draft.task);
            }
        }
    }

    pub fn add_sub_task(&mut self) {
        if let Some(draft) = self.draft_mut() {
            draft.task.sub_tasks.push(SubTask {
                id: generate_id(),
                title: "New subtask".to_string(),
                description: "Description".to_string(),
                completed: false,
            });
            Self::refresh_progress(&mut draft.task);
        }
    }

    pub fn delete_sub_task(&mut self, sub_task_id: &str) {
        if let Some(draft) = self.draft_mut() {
            draft.task.sub_tasks.retain(|s| s.id != sub_task_id);
            Self::refresh_progress(&mut draft.task);
        }
    }

    /// Merge the edited title into the draft and hand it to the save
    /// callback. The callback owns validation and the store commit; its
    /// verdict is returned unchanged.
    pub async fn save_changes<F, Fut>(&mut self, on_save: F) -> bool
    where
        F: FnOnce(Task) -> Fut,
        Fut: Future<Output = bool>,
    {
        let Some(draft) = self.draft_mut() else {
            return false;
        };
        draft.task.title = draft.edited_title.clone();
        let task = draft.task.clone();
        on_save(task).await
    }

    /// Force the draft to a completed state (progress 100, every sub-task
    /// checked) and hand it to the save callback. Field validation is not
    /// re-applied on this path.
    pub async fn mark_as_completed<F, Fut>(&mut self, on_save: F) -> bool
    where
        F: FnOnce(Task) -> Fut,
        Fut: Future<Output = bool>,
    {
        let Some(draft) = self.draft_mut() else {
            return false;
        };
        draft.task.progress = 100;
        for sub in &mut draft.task.sub_tasks {
            sub.completed = true;
        }
        let task = draft.task.clone();
        on_save(task).await
    }
}
