//! Task List Component
//!
//! Task cards with the category icon, title and progress ring. Hovering a
//! card reveals the edit and delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ProgressRing;
use crate::context::{use_app_context, use_theme, Page};
use crate::icons::{icon_colors, icon_glyph};
use crate::models::Task;
use crate::store::use_task_store;

#[component]
pub fn TaskList(#[prop(into)] tasks: Signal<Vec<Task>>) -> impl IntoView {
    let theme = use_theme();
    let ctx = use_app_context();
    let store = use_task_store();
    let (hovered, set_hovered) = signal::<Option<String>>(None);

    view! {
        <div class="task-list">
            <For
                each=move || tasks.get()
                key=|task| task.id.clone()
                children=move |task: Task| {
                    let colors = icon_colors(&task.icon);
                    let is_hovered = Memo::new({
                        let id = task.id.clone();
                        move |_| hovered.get().as_deref() == Some(id.as_str())
                    });
                    let enter_id = task.id.clone();
                    let edit_id = task.id.clone();
                    let delete_id = task.id.clone();

                    view! {
                        <div
                            class="task-card-wrap"
                            on:mouseenter=move |_| set_hovered.set(Some(enter_id.clone()))
                            on:mouseleave=move |_| set_hovered.set(None)
                        >
                            <div class=move || {
                                format!(
                                    "task-card {} {}",
                                    theme.class("card-dark", "card-light"),
                                    if is_hovered.get() { "card-shrunk" } else { "" },
                                )
                            }>
                                <div class="task-card-main">
                                    <span
                                        class="task-icon"
                                        style=format!("background-color: {}", colors.unfilled)
                                    >
                                        {icon_glyph(&task.icon)}
                                    </span>
                                    <div class="task-card-text">
                                        <span class=move || theme.class("text-dark", "text-light")>
                                            {task.category.clone()}
                                        </span>
                                        <span class="task-title">{task.title.clone()}</span>
                                    </div>
                                </div>
                                <Show when=move || !is_hovered.get()>
                                    <ProgressRing
                                        progress=task.progress
                                        filled_color=colors.filled
                                        unfilled_color=colors.unfilled
                                    />
                                </Show>
                            </div>

                            <Show when=move || is_hovered.get()>
                                <div class="task-card-actions">
                                    <button
                                        class="card-action edit"
                                        on:click={
                                            let id = edit_id.clone();
                                            move |_| ctx.navigate(Page::EditTask(Some(id.clone())))
                                        }
                                    >
                                        "\u{270F}"
                                    </button>
                                    <button
                                        class="card-action delete"
                                        on:click={
                                            let id = delete_id.clone();
                                            move |_| {
                                                let id = id.clone();
                                                spawn_local(async move {
                                                    let _ = store.remove(&id).await;
                                                });
                                            }
                                        }
                                    >
                                        "\u{1F5D1}"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    }
                }
            />
        </div>
    }
}
