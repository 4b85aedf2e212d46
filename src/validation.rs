//! Draft Validation
//!
//! Pure field-presence checks for a task draft. Results are data; validation
//! never fails with an error, malformed fields simply fail their check.

use crate::models::{Task, ValidationFields};

/// Compute field-presence errors for a draft.
pub fn validate(task: &Task) -> ValidationFields {
    ValidationFields {
        category_and_icon_exist: !task.category.is_empty() && !task.icon.is_empty(),
        title_exist: !task.title.is_empty(),
        missing_sub_task_titles: task
            .sub_tasks
            .iter()
            .enumerate()
            .filter(|(_, sub)| sub.title.is_empty())
            .map(|(index, _)| index)
            .collect(),
    }
}

impl ValidationFields {
    /// Whether these results block a save.
    ///
    /// Blank sub-task titles only count against a draft that actually has
    /// sub-tasks; a draft with none can never fail that check.
    pub fn blocks_save(&self, sub_task_count: usize) -> bool {
        !self.title_exist
            || !self.category_and_icon_exist
            || (!self.missing_sub_task_titles.is_empty() && sub_task_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubTask;

    fn sub(title: &str) -> SubTask {
        SubTask {
            id: "s".to_string(),
            title: title.to_string(),
            description: String::new(),
            completed: false,
        }
    }

    fn draft(title: &str, category: &str, icon: &str, subs: Vec<SubTask>) -> Task {
        Task {
            id: "t".to_string(),
            category: category.to_string(),
            title: title.to_string(),
            icon: icon.to_string(),
            icon_bg: String::new(),
            progress: 0,
            sub_tasks: subs,
        }
    }

    #[test]
    fn missing_title_fails_only_the_title_check() {
        let task = draft("", "Work", "Work", vec![]);
        let result = validate(&task);
        assert!(result.category_and_icon_exist);
        assert!(!result.title_exist);
        assert!(result.missing_sub_task_titles.is_empty());
        assert!(result.blocks_save(task.sub_tasks.len()));
    }

    #[test]
    fn blank_sub_task_title_is_reported_by_index() {
        let task = draft("X", "Work", "Work", vec![sub("first"), sub(""), sub("")]);
        let result = validate(&task);
        assert_eq!(result.missing_sub_task_titles, vec![1, 2]);
        assert!(result.blocks_save(task.sub_tasks.len()));
    }

    #[test]
    fn complete_draft_passes_every_check() {
        let task = draft("X", "Work", "Work", vec![]);
        let result = validate(&task);
        assert!(result.category_and_icon_exist);
        assert!(result.title_exist);
        assert!(result.missing_sub_task_titles.is_empty());
        assert!(!result.blocks_save(task.sub_tasks.len()));
    }

    #[test]
    fn category_without_icon_fails_the_pair_check() {
        let task = draft("X", "Work", "", vec![]);
        assert!(!validate(&task).category_and_icon_exist);
    }

    #[test]
    fn validate_is_idempotent() {
        let task = draft("", "Work", "", vec![sub("")]);
        assert_eq!(validate(&task), validate(&task));
    }
}
