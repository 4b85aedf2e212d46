//! Task Store
//!
//! Process-wide reactive container for the task collection. Created once in
//! `App`, handed to components via context. Every mutation goes through the
//! gateway and is followed by a full refetch, so `tasks` always reflects what
//! is actually persisted; no optimistic updates.

use leptos::prelude::*;

use crate::api::{TasksApi, UpdateOutcome};
use crate::models::Task;
use crate::storage::{BrowserStorage, KeyValueStore, StorageError};

/// Reactive task collection plus in-flight and error status
#[derive(Clone, Copy)]
pub struct TaskStore<S: KeyValueStore + Clone + 'static> {
    api: TasksApi<S>,
    pub tasks: RwSignal<Vec<Task>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

/// The store as wired up in the browser
pub type AppTaskStore = TaskStore<BrowserStorage>;

/// Get the task store from context
pub fn use_task_store() -> AppTaskStore {
    expect_context::<AppTaskStore>()
}

impl<S: KeyValueStore + Clone + 'static> TaskStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            api: TasksApi::new(store),
            tasks: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    fn begin(&self) {
        self.loading.set(true);
        self.error.set(None);
    }

    /// Refetch the collection from storage. On failure the previous `tasks`
    /// value is kept and `error` carries a user-facing message.
    pub async fn refresh(&self) {
        self.begin();
        match self.api.load_all().await {
            Ok(tasks) => self.tasks.set(tasks),
            Err(_) => self.error.set(Some("Failed to fetch tasks".to_string())),
        }
        self.loading.set(false);
    }

    /// Persist a new task, then refetch.
    pub async fn create(&self, task: Task) -> Result<(), StorageError> {
        self.begin();
        let result = self.api.append(task).await;
        if result.is_err() {
            self.error.set(Some("Failed to add task".to_string()));
        }
        self.loading.set(false);
        result?;
        self.refresh().await;
        Ok(())
    }

    /// Replace the stored task with a matching id, then refetch. A stale edit
    /// (id no longer present) leaves storage untouched and reports
    /// `NotFound` to the caller.
    pub async fn update(&self, task: Task) -> Result<UpdateOutcome, StorageError> {
        self.begin();
        let result = self.api.replace(task).await;
        if result.is_err() {
            self.error.set(Some("Failed to edit task".to_string()));
        }
        self.loading.set(false);
        let outcome = result?;
        self.refresh().await;
        Ok(outcome)
    }

    /// Remove a task by id, then refetch.
    pub async fn remove(&self, task_id: &str) -> Result<(), StorageError> {
        self.begin();
        let result = self.api.remove(task_id).await;
        if result.is_err() {
            self.error.set(Some("Failed to delete task".to_string()));
        }
        self.loading.set(false);
        result?;
        self.refresh().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubTask;
    use crate::storage::MemoryStorage;

    fn task(id: &str, title: &str, progress: u8) -> Task {
        Task {
            id: id.to_string(),
            category: "Work".to_string(),
            title: title.to_string(),
            icon: "Work".to_string(),
            icon_bg: String::new(),
            progress,
            sub_tasks: Vec::new(),
        }
    }

    /// Backend that rejects every call, for the error path
    #[derive(Clone)]
    struct BrokenStorage;

    impl KeyValueStore for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("broken".to_string()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("broken".to_string()))
        }
        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("broken".to_string()))
        }
    }

    #[tokio::test]
    async fn refresh_loads_seeded_collection() {
        let store = TaskStore::new(MemoryStorage::new());
        store.refresh().await;
        assert!(!store.tasks.get_untracked().is_empty());
        assert!(!store.loading.get_untracked());
        assert_eq!(store.error.get_untracked(), None);
    }

    #[tokio::test]
    async fn create_makes_tasks_reflect_storage() {
        let store = TaskStore::new(MemoryStorage::new());
        store.refresh().await;
        let before = store.tasks.get_untracked().len();

        store.create(task("t-1", "New", 0)).await.unwrap();

        let tasks = store.tasks.get_untracked();
        assert_eq!(tasks.len(), before + 1);
        assert_eq!(tasks.last().map(|t| t.id.clone()), Some("t-1".to_string()));
    }

    #[tokio::test]
    async fn update_of_missing_id_is_a_visible_no_op() {
        let store = TaskStore::new(MemoryStorage::new());
        store.refresh().await;
        let before = store.tasks.get_untracked();

        let outcome = store.update(task("ghost", "Stale", 0)).await.unwrap();
        assert_eq!(outcome, UpdateOutcome::NotFound);
        assert_eq!(store.tasks.get_untracked(), before);
    }

    #[tokio::test]
    async fn update_replaces_matching_task() {
        let store = TaskStore::new(MemoryStorage::new());
        store.create(task("t-1", "Before", 0)).await.unwrap();

        let mut edited = task("t-1", "After", 50);
        edited.sub_tasks.push(SubTask {
            id: "s-1".to_string(),
            title: "Half done".to_string(),
            description: String::new(),
            completed: true,
        });
        let outcome = store.update(edited.clone()).await.unwrap();

        assert_eq!(outcome, UpdateOutcome::Updated);
        let tasks = store.tasks.get_untracked();
        assert_eq!(tasks.iter().find(|t| t.id == "t-1"), Some(&edited));
    }

    #[tokio::test]
    async fn remove_then_remove_again_is_stable() {
        let store = TaskStore::new(MemoryStorage::new());
        store.create(task("t-1", "Doomed", 0)).await.unwrap();

        store.remove("t-1").await.unwrap();
        let once = store.tasks.get_untracked();
        store.remove("t-1").await.unwrap();
        assert_eq!(store.tasks.get_untracked(), once);
    }

    #[tokio::test]
    async fn save_flow_rejects_a_blank_title_without_persisting() {
        let store = TaskStore::new(MemoryStorage::new());
        store.refresh().await;
        let before = store.tasks.get_untracked();

        let draft = task("t-1", "", 0);
        let mut session = crate::edit::EditSession::new();
        session.begin(&draft);

        let committer = store.clone();
        let saved = session
            .save_changes(move |task| async move {
                let fields = crate::validation::validate(&task);
                if fields.blocks_save(task.sub_tasks.len()) {
                    return false;
                }
                committer.create(task).await.is_ok()
            })
            .await;

        assert!(!saved);
        assert_eq!(store.tasks.get_untracked(), before);
    }

    #[tokio::test]
    async fn mark_as_completed_persists_progress_and_sub_tasks() {
        let store = TaskStore::new(MemoryStorage::new());
        let mut two_subs = task("t-1", "Two subs", 50);
        two_subs.sub_tasks = vec![
            SubTask {
                id: "s-1".to_string(),
                title: "Done".to_string(),
                description: String::new(),
                completed: true,
            },
            SubTask {
                id: "s-2".to_string(),
                title: "Pending".to_string(),
                description: String::new(),
                completed: false,
            },
        ];
        store.create(two_subs.clone()).await.unwrap();

        let mut session = crate::edit::EditSession::new();
        session.begin(&two_subs);
        let committer = store.clone();
        let saved = session
            .mark_as_completed(move |task| async move { committer.update(task).await.is_ok() })
            .await;
        assert!(saved);

        let tasks = store.tasks.get_untracked();
        let persisted = tasks.iter().find(|t| t.id == "t-1").unwrap();
        assert_eq!(persisted.progress, 100);
        assert!(persisted.sub_tasks.iter().all(|s| s.completed));
    }

    #[tokio::test]
    async fn failures_set_error_and_propagate() {
        let store = TaskStore::new(BrokenStorage);

        store.refresh().await;
        assert_eq!(
            store.error.get_untracked(),
            Some("Failed to fetch tasks".to_string())
        );

        let result = store.create(task("t-1", "Nope", 0)).await;
        assert!(result.is_err());
        assert_eq!(
            store.error.get_untracked(),
            Some("Failed to add task".to_string())
        );
        assert!(!store.loading.get_untracked());
    }
}
