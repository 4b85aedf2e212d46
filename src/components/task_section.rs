//! Task Section Heading
//!
//! Section title with a live count and an optional right-hand element.

use leptos::prelude::*;

use crate::context::use_theme;

#[component]
pub fn TaskSection(
    #[prop(into)] title: String,
    #[prop(into)] count: Signal<usize>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let theme = use_theme();

    view! {
        <section class="task-section">
            <div class="task-section-heading">
                <h2 class=move || theme.class("text-dark", "text-light")>{title}</h2>
                <span class="task-section-count">{move || count.get()}</span>
            </div>
            {children.map(|c| c())}
        </section>
    }
}
