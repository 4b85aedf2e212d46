//! Home Page
//!
//! In-progress and completed task lists with a shared category filter.

use leptos::prelude::*;

use crate::components::{FilterDropdown, TaskList, TaskSection};
use crate::context::{use_app_context, use_theme, Page};
use crate::models::Task;
use crate::store::use_task_store;

#[component]
pub fn HomePage() -> impl IntoView {
    let theme = use_theme();
    let ctx = use_app_context();
    let store = use_task_store();

    // Shared by both section filter dropdowns; empty selection = show all
    let (selected_filters, set_selected_filters) = signal::<Vec<String>>(Vec::new());
    let toggle_filter = Callback::new(move |value: String| {
        set_selected_filters.update(|filters| {
            if let Some(pos) = filters.iter().position(|f| f == &value) {
                filters.remove(pos);
            } else {
                filters.push(value);
            }
        });
    });

    let matches_filter = move |task: &Task| {
        let filters = selected_filters.get();
        filters.is_empty() || filters.iter().any(|f| f == &task.category)
    };

    let in_progress = Memo::new(move |_| {
        store
            .tasks
            .get()
            .into_iter()
            .filter(|t| t.progress != 100)
            .filter(|t| matches_filter(t))
            .collect::<Vec<_>>()
    });
    let completed = Memo::new(move |_| {
        store
            .tasks
            .get()
            .into_iter()
            .filter(|t| t.progress == 100)
            .filter(|t| matches_filter(t))
            .collect::<Vec<_>>()
    });
    // Single list, in-progress first, matching the two section headings
    let visible = Memo::new(move |_| {
        let mut tasks = in_progress.get();
        tasks.extend(completed.get());
        tasks
    });

    view! {
        <div class=move || format!("home-page {}", theme.class("page-dark", "page-light"))>
            <Show when=move || store.loading.get()>
                <div class="status-screen">"Loading..."</div>
            </Show>
            <Show when=move || !store.loading.get() && store.error.get().is_some()>
                <div class="status-screen">
                    {move || format!("Error: {}", store.error.get().unwrap_or_default())}
                </div>
            </Show>
            <Show when=move || !store.loading.get() && store.error.get().is_none()>
                <main class="home-main">
                    <TaskSection title="In progress" count=Signal::derive(move || in_progress.get().len())>
                        <FilterDropdown selected=selected_filters on_toggle=toggle_filter />
                    </TaskSection>

                    <TaskList tasks=Signal::derive(move || visible.get()) />

                    <TaskSection title="Completed" count=Signal::derive(move || completed.get().len())>
                        <FilterDropdown selected=selected_filters on_toggle=toggle_filter />
                    </TaskSection>

                    <button
                        class="add-task-btn"
                        on:click=move |_| ctx.navigate(Page::NewTask)
                    >
                        "+ Add new task"
                    </button>
                </main>
            </Show>
        </div>
    }
}
