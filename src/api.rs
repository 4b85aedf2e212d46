//! Task API Gateway
//!
//! Persistence calls for the task collection. Local storage is the only
//! datastore today; the call shape (load_all / append / replace / remove) is
//! kept async and narrow so a future network backend can slot in behind the
//! same interface.
//!
//! Every operation rewrites the whole collection as one JSON document under
//! the `"tasks"` slot, so each mutation costs a full serialization pass.

use crate::models::Task;
use crate::storage::{KeyValueStore, StorageError, TASKS_KEY};

/// Outcome of replacing a task by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    /// No entry with that id exists; storage is left untouched
    NotFound,
}

/// Built-in collection used to seed storage on first run
pub fn default_tasks() -> Result<Vec<Task>, StorageError> {
    serde_json::from_str(include_str!("../assets/default_tasks.json"))
        .map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Gateway over one key-value slot holding the task collection
#[derive(Clone, Copy)]
pub struct TasksApi<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> TasksApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn read(&self) -> Result<Option<Vec<Task>>, StorageError> {
        match self.store.get(TASKS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StorageError::Serialization(e.to_string())),
            None => Ok(None),
        }
    }

    fn write(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(tasks)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.store.set(TASKS_KEY, &raw)
    }

    /// Load the persisted collection, seeding the built-in default set on
    /// first run. Missing data is never an error.
    pub async fn load_all(&self) -> Result<Vec<Task>, StorageError> {
        match self.read()? {
            Some(tasks) => Ok(tasks),
            None => {
                let seed = default_tasks()?;
                self.write(&seed)?;
                Ok(seed)
            }
        }
    }

    /// Append one task to the end of the collection.
    pub async fn append(&self, task: Task) -> Result<(), StorageError> {
        let mut tasks = self.load_all().await?;
        tasks.push(task);
        self.write(&tasks)
    }

    /// Replace the task with a matching id. A missing id leaves storage
    /// untouched and reports `NotFound` instead of failing.
    pub async fn replace(&self, task: Task) -> Result<UpdateOutcome, StorageError> {
        let mut tasks = self.read()?.unwrap_or_default();
        match tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => {
                *slot = task;
                self.write(&tasks)?;
                Ok(UpdateOutcome::Updated)
            }
            None => Ok(UpdateOutcome::NotFound),
        }
    }

    /// Remove the task with a matching id. Idempotent; an absent id is a
    /// no-op, not an error.
    pub async fn remove(&self, task_id: &str) -> Result<(), StorageError> {
        let mut tasks = self.load_all().await?;
        tasks.retain(|t| t.id != task_id);
        self.write(&tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn api() -> TasksApi<MemoryStorage> {
        TasksApi::new(MemoryStorage::new())
    }

    fn task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            category: "Work".to_string(),
            title: title.to_string(),
            icon: "Work".to_string(),
            icon_bg: String::new(),
            progress: 0,
            sub_tasks: Vec::new(),
        }
    }

    #[tokio::test]
    async fn empty_storage_is_seeded_with_defaults() {
        let store = MemoryStorage::new();
        let api = TasksApi::new(store.clone());

        let loaded = api.load_all().await.unwrap();
        assert_eq!(loaded, default_tasks().unwrap());
        assert!(!loaded.is_empty());

        // The seed is now persisted under the "tasks" slot
        let raw = store.get(TASKS_KEY).unwrap().unwrap();
        let persisted: Vec<Task> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, loaded);
    }

    #[tokio::test]
    async fn append_then_load_round_trips_in_order() {
        let api = api();
        let before = api.load_all().await.unwrap();

        let added = task("t-1", "Round trip");
        api.append(added.clone()).await.unwrap();

        let after = api.load_all().await.unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.last(), Some(&added));
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let api = api();
        api.append(task("t-1", "Doomed")).await.unwrap();

        api.remove("t-1").await.unwrap();
        let once = api.load_all().await.unwrap();
        api.remove("t-1").await.unwrap();
        let twice = api.load_all().await.unwrap();

        assert_eq!(once, twice);
        assert!(once.iter().all(|t| t.id != "t-1"));
    }

    #[tokio::test]
    async fn replace_swaps_matching_id_only() {
        let api = api();
        api.append(task("t-1", "Before")).await.unwrap();

        let outcome = api.replace(task("t-1", "After")).await.unwrap();
        assert_eq!(outcome, UpdateOutcome::Updated);

        let tasks = api.load_all().await.unwrap();
        let edited = tasks.iter().find(|t| t.id == "t-1").unwrap();
        assert_eq!(edited.title, "After");
    }

    #[tokio::test]
    async fn replace_of_missing_id_reports_not_found_and_changes_nothing() {
        let api = api();
        api.append(task("t-1", "Kept")).await.unwrap();
        let before = api.load_all().await.unwrap();

        let outcome = api.replace(task("ghost", "Ignored")).await.unwrap();
        assert_eq!(outcome, UpdateOutcome::NotFound);
        assert_eq!(api.load_all().await.unwrap(), before);
    }
}
