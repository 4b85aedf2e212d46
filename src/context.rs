//! Application Context
//!
//! Shared signals provided via the Leptos Context API: the current page and
//! the persisted dark-mode flag.

use leptos::prelude::*;

use crate::analytics;
use crate::storage::{BrowserStorage, KeyValueStore, CURRENT_TASK_KEY, DARK_MODE_KEY};

/// Screens the app can show. `EditTask(None)` falls back to the task id
/// remembered in local storage, so an interrupted edit can resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    NewTask,
    EditTask(Option<String>),
}

/// Screen to open on startup. A task id left under `"currentTaskId"` means
/// an edit was interrupted; reopen it, letting the task screen resolve the
/// id from storage.
pub fn initial_page<S: KeyValueStore>(storage: &S) -> Page {
    match storage.get(CURRENT_TASK_KEY) {
        Ok(Some(_)) => Page::EditTask(None),
        _ => Page::Home,
    }
}

/// App-wide navigation provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub page: ReadSignal<Page>,
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
        }
    }

    /// Switch screens, logging the visit.
    pub fn navigate(&self, page: Page) {
        analytics::log_page_visit(analytics::page_name(&page));
        self.set_page.set(page);
    }
}

/// Get the navigation context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Dark-mode flag, persisted under `"isDarkMode"`
#[derive(Clone, Copy)]
pub struct ThemeContext {
    is_dark: RwSignal<bool>,
    storage: BrowserStorage,
}

impl ThemeContext {
    /// Restore the stored flag; defaults to light mode.
    pub fn load(storage: BrowserStorage) -> Self {
        let stored = storage
            .get(DARK_MODE_KEY)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str::<bool>(&raw).ok())
            .unwrap_or(false);
        Self {
            is_dark: RwSignal::new(stored),
            storage,
        }
    }

    pub fn is_dark_mode(&self) -> bool {
        self.is_dark.get()
    }

    pub fn toggle(&self) {
        let next = !self.is_dark.get_untracked();
        self.is_dark.set(next);
        // Best effort; losing the preference is not worth surfacing
        let _ = self.storage.set(DARK_MODE_KEY, if next { "true" } else { "false" });
    }

    /// CSS class pair switched on the flag
    pub fn class(&self, dark: &'static str, light: &'static str) -> &'static str {
        if self.is_dark_mode() {
            dark
        } else {
            light
        }
    }
}

/// Get the theme context
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn startup_resumes_an_interrupted_edit() {
        let storage = MemoryStorage::new();
        assert_eq!(initial_page(&storage), Page::Home);

        storage.set(CURRENT_TASK_KEY, "1700000000000-1").unwrap();
        assert_eq!(initial_page(&storage), Page::EditTask(None));

        storage.remove(CURRENT_TASK_KEY).unwrap();
        assert_eq!(initial_page(&storage), Page::Home);
    }
}
