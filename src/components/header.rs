//! App Header Component

use leptos::prelude::*;

use crate::context::{use_app_context, use_theme, Page};

/// Top bar with the app title and the theme toggle
#[component]
pub fn Header() -> impl IntoView {
    let theme = use_theme();
    let ctx = use_app_context();

    view! {
        <header class=move || format!("app-header {}", theme.class("header-dark", "header-light"))>
            <button
                class="header-title"
                on:click=move |_| ctx.navigate(Page::Home)
            >
                "Taskdeck"
            </button>
            <button
                class="theme-toggle"
                on:click=move |_| theme.toggle()
            >
                {move || if theme.is_dark_mode() { "\u{2600}" } else { "\u{1F319}" }}
            </button>
        </header>
    }
}
