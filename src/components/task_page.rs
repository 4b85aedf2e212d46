//! Task Page
//!
//! The new/edit screen. Owns the edit session for one draft and wires its
//! terminal actions to validation and the task store. The id of an edit in
//! progress is mirrored to local storage so navigating away and back resumes
//! the same task.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CategoryDropdown, SubTasksList};
use crate::context::{use_app_context, use_theme, Page};
use crate::edit::EditSession;
use crate::models::{Task, ValidationFields};
use crate::storage::{BrowserStorage, KeyValueStore, CURRENT_TASK_KEY};
use crate::store::use_task_store;
use crate::validation::validate;

#[component]
pub fn TaskPage(
    is_new: bool,
    #[prop(optional_no_strip)] task_id: Option<String>,
) -> impl IntoView {
    let theme = use_theme();
    let ctx = use_app_context();
    let store = use_task_store();
    let storage = BrowserStorage;

    // Explicit navigation id wins; otherwise resume the remembered edit
    let task_id = task_id.or_else(|| storage.get(CURRENT_TASK_KEY).ok().flatten());

    let session = RwSignal::new(EditSession::new());
    let (validation, set_validation) = signal(ValidationFields::passing());

    // Fetch once on mount so an edit screen opened directly still has data
    Effect::new(move |_| {
        spawn_local(async move {
            store.refresh().await;
        });
    });

    // Transition the session to editing exactly once, when the initial task
    // is available. Later refetches must not clobber in-progress edits.
    let init_id = task_id.clone();
    Effect::new(move |_| {
        let tasks = store.tasks.get();
        if session.with_untracked(|s| s.is_editing()) {
            return;
        }
        if is_new {
            session.update(|s| s.begin(&Task::new_draft()));
        } else if let Some(id) = &init_id {
            if let Some(task) = tasks.iter().find(|t| t.id == *id) {
                session.update(|s| s.begin(task));
                let _ = storage.set(CURRENT_TASK_KEY, id);
            }
        }
    });

    // Validation gate plus store commit, injected into the session's
    // terminal actions. Mark-as-completed skips the field checks, matching
    // the save policy the product shipped with.
    let commit = move |task: Task, validated: bool| async move {
        if validated {
            let fields = validate(&task);
            if fields.blocks_save(task.sub_tasks.len()) {
                set_validation.set(fields);
                return false;
            }
        }
        let saved = if is_new {
            store.create(task).await.is_ok()
        } else {
            store.update(task).await.is_ok()
        };
        if saved {
            let _ = storage.remove(CURRENT_TASK_KEY);
            ctx.navigate(Page::Home);
        }
        saved
    };

    let on_save = move |_| {
        spawn_local(async move {
            let mut working = session.get_untracked();
            working.save_changes(|task| commit(task, true)).await;
            session.set(working);
        });
    };

    let on_mark_completed = move |_| {
        spawn_local(async move {
            let mut working = session.get_untracked();
            working.mark_as_completed(|task| commit(task, false)).await;
            session.set(working);
        });
    };

    let on_delete = move |_| {
        let draft_id = session.with_untracked(|s| s.draft().map(|t| t.id.clone()));
        spawn_local(async move {
            if let Some(id) = draft_id {
                let _ = store.remove(&id).await;
            }
            let _ = storage.remove(CURRENT_TASK_KEY);
            ctx.navigate(Page::Home);
        });
    };

    let missing_task = move || {
        !store.loading.get()
            && !is_new
            && !store.tasks.get().is_empty()
            && !session.with(|s| s.is_editing())
    };

    view! {
        <div class=move || format!("task-page {}", theme.class("page-dark", "page-light"))>
            <Show when=move || store.loading.get()>
                <div class="status-screen">"Loading task..."</div>
            </Show>
            <Show when=missing_task>
                <div class="status-screen">
                    "Task not found."
                    <button class="link-btn" on:click=move |_| ctx.navigate(Page::Home)>
                        "Go back"
                    </button>
                </div>
            </Show>

            <Show when=move || !store.loading.get() && session.with(|s| s.is_editing())>
                <div class="task-editor">
                    <div class="task-editor-header">
                        <button class="back-btn" on:click=move |_| ctx.navigate(Page::Home)>
                            "\u{2190}"
                        </button>
                        <h1 class=move || theme.class("text-dark", "text-light")>
                            {if is_new { "Create new task" } else { "Edit Task" }}
                        </h1>
                    </div>

                    <div class="task-editor-form">
                        <input
                            type="text"
                            class=move || {
                                format!(
                                    "title-input {}",
                                    if validation.get().title_exist { "" } else { "input-error" },
                                )
                            }
                            placeholder="Task title"
                            prop:value=move || session.with(|s| s.edited_title().to_string())
                            on:input=move |ev| {
                                let title = event_target_value(&ev);
                                session.update(|s| s.set_title(&title));
                            }
                        />
                        <Show when=move || !validation.get().title_exist>
                            <span class="field-error">"Title is required"</span>
                        </Show>

                        <CategoryDropdown
                            selected=Signal::derive(move || {
                                session.with(|s| {
                                    s.draft().map(|t| t.category.clone()).unwrap_or_default()
                                })
                            })
                            on_select=Callback::new(move |(category, icon): (String, String)| {
                                session.update(|s| s.set_category(&category, &icon));
                            })
                        />
                        <Show when=move || !validation.get().category_and_icon_exist>
                            <span class="field-error">"Category is required"</span>
                        </Show>
                    </div>

                    <SubTasksList session=session validation=validation />

                    <div class="task-editor-actions">
                        <button
                            class="secondary-btn"
                            on:click=move |_| session.update(|s| s.add_sub_task())
                        >
                            "+ Add subtask"
                        </button>
                        <Show when=move || !is_new>
                            <button class="danger-btn" on:click=on_delete>
                                "Delete task"
                            </button>
                        </Show>
                    </div>

                    <div class="task-editor-save">
                        <button class="primary-btn" on:click=on_save>
                            "Save Changes"
                        </button>
                        <button class="secondary-btn" on:click=on_mark_completed>
                            "Mark as Completed"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
