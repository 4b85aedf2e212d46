//! Sub-Task List Component
//!
//! Editable rows for the task screen: completion checkbox, title and
//! description fields, delete button. Rows flagged by validation get an
//! error outline.
//!
//! Rows are keyed by sub-task id so a keystroke patches the existing
//! elements in place instead of rebuilding the list and losing focus.

use leptos::prelude::*;

use crate::context::use_theme;
use crate::edit::{EditSession, SubTaskPatch};
use crate::models::{SubTask, ValidationFields};

#[component]
pub fn SubTasksList(
    session: RwSignal<EditSession>,
    validation: ReadSignal<ValidationFields>,
) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="subtask-list">
            <For
                each=move || session.with(|s| s.sub_tasks().to_vec())
                key=|sub| sub.id.clone()
                children=move |sub: SubTask| {
                    let flagged = Memo::new({
                        let id = sub.id.clone();
                        move |_| {
                            session
                                .with(|s| s.sub_tasks().iter().position(|t| t.id == id))
                                .map(|index| {
                                    validation.get().missing_sub_task_titles.contains(&index)
                                })
                                .unwrap_or(false)
                        }
                    });
                    let checked = Memo::new({
                        let id = sub.id.clone();
                        move |_| {
                            session.with(|s| {
                                s.sub_task(&id).map(|t| t.completed).unwrap_or(false)
                            })
                        }
                    });
                    let title = {
                        let id = sub.id.clone();
                        move || {
                            session.with(|s| {
                                s.sub_task(&id).map(|t| t.title.clone()).unwrap_or_default()
                            })
                        }
                    };
                    let description = {
                        let id = sub.id.clone();
                        move || {
                            session.with(|s| {
                                s.sub_task(&id)
                                    .map(|t| t.description.clone())
                                    .unwrap_or_default()
                            })
                        }
                    };
                    let toggle_id = sub.id.clone();
                    let title_id = sub.id.clone();
                    let desc_id = sub.id.clone();
                    let delete_id = sub.id.clone();

                    view! {
                        <div class=move || {
                            format!(
                                "subtask-row {} {}",
                                theme.class("card-dark", "card-light"),
                                if flagged.get() { "subtask-error" } else { "" },
                            )
                        }>
                            <input
                                type="checkbox"
                                class="subtask-check"
                                prop:checked=move || checked.get()
                                on:change=move |_| {
                                    session.update(|s| s.toggle_sub_task(&toggle_id));
                                }
                            />
                            <div class="subtask-fields">
                                <input
                                    type="text"
                                    class="subtask-title"
                                    prop:value=title
                                    on:input=move |ev| {
                                        let title = event_target_value(&ev);
                                        session.update(|s| {
                                            s.update_sub_task(&title_id, SubTaskPatch {
                                                title: Some(title.clone()),
                                                ..Default::default()
                                            });
                                        });
                                    }
                                />
                                <textarea
                                    class="subtask-description"
                                    prop:value=description
                                    on:input=move |ev| {
                                        let description = event_target_value(&ev);
                                        session.update(|s| {
                                            s.update_sub_task(&desc_id, SubTaskPatch {
                                                description: Some(description.clone()),
                                                ..Default::default()
                                            });
                                        });
                                    }
                                ></textarea>
                                <Show when=move || flagged.get()>
                                    <span class="field-error">"Subtask title is required"</span>
                                </Show>
                            </div>
                            <button
                                class="subtask-delete"
                                on:click=move |_| {
                                    session.update(|s| s.delete_sub_task(&delete_id));
                                }
                            >
                                "\u{00D7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
