//! Taskdeck App
//!
//! Root component: builds the store and contexts, fetches the collection on
//! mount, and switches screens on the page signal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Header, HomePage, TaskPage};
use crate::context::{initial_page, AppContext, Page, ThemeContext};
use crate::storage::BrowserStorage;
use crate::store::TaskStore;

#[component]
pub fn App() -> impl IntoView {
    let storage = BrowserStorage;
    let store = TaskStore::new(storage);
    let theme = ThemeContext::load(storage);
    // Reopen an interrupted edit, otherwise land on the home screen
    let (page, set_page) = signal(initial_page(&storage));
    let ctx = AppContext::new((page, set_page));

    provide_context(store);
    provide_context(theme);
    provide_context(ctx);

    // Initial load
    Effect::new(move |_| {
        spawn_local(async move {
            store.refresh().await;
        });
    });

    view! {
        <div class=move || format!("app-shell {}", theme.class("shell-dark", "shell-light"))>
            <Header />
            {move || match page.get() {
                Page::Home => view! { <HomePage /> }.into_any(),
                Page::NewTask => view! { <TaskPage is_new=true /> }.into_any(),
                Page::EditTask(task_id) => {
                    view! { <TaskPage is_new=false task_id=task_id /> }.into_any()
                }
            }}
        </div>
    }
}
