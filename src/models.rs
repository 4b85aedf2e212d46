//! Task Models
//!
//! Data structures persisted to local storage. Field names on the wire stay
//! camelCase so an existing `"tasks"` document round-trips bit-exact.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// A single sub-task owned by its parent task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// A task with category, icon and derived completion progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub category: String,
    pub title: String,
    pub icon: String,
    /// Color hint kept for wire compatibility, unused by the UI
    pub icon_bg: String,
    /// Integer percent 0-100, derived from sub-tasks while any exist
    pub progress: u8,
    pub sub_tasks: Vec<SubTask>,
}

impl Task {
    /// Blank draft for the "new task" screen
    pub fn new_draft() -> Self {
        Self {
            id: generate_id(),
            category: String::new(),
            title: String::new(),
            icon: String::new(),
            icon_bg: String::new(),
            progress: 0,
            sub_tasks: Vec::new(),
        }
    }
}

/// Field-presence check result for a task draft. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationFields {
    pub category_and_icon_exist: bool,
    pub title_exist: bool,
    /// Indices of sub-tasks with an empty title, in list order
    pub missing_sub_task_titles: Vec<usize>,
}

impl ValidationFields {
    /// All-clear value used before the first save attempt
    pub fn passing() -> Self {
        Self {
            category_and_icon_exist: true,
            title_exist: true,
            missing_sub_task_titles: Vec::new(),
        }
    }
}

static ID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generate an identifier for a new task or sub-task.
///
/// Epoch millis plus a process-wide sequence number, so ids stay unique even
/// when several are minted within the same millisecond.
pub fn generate_id() -> String {
    let seq = ID_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", epoch_millis(), seq)
}

#[cfg(target_arch = "wasm32")]
fn epoch_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn epoch_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_in_rapid_succession() {
        let ids: Vec<String> = (0..100).map(|_| generate_id()).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn task_serializes_with_camel_case_wire_names() {
        let task = Task {
            id: "1".into(),
            category: "Work".into(),
            title: "Ship it".into(),
            icon: "Work".into(),
            icon_bg: "#EDE8FF".into(),
            progress: 50,
            sub_tasks: vec![SubTask {
                id: "1-0".into(),
                title: "Draft".into(),
                description: "".into(),
                completed: true,
            }],
        };
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("iconBg").is_some());
        assert!(json.get("subTasks").is_some());
        assert!(json.get("icon_bg").is_none());
    }

    #[test]
    fn task_round_trips_through_json() {
        let task = Task::new_draft();
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
