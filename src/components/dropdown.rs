//! Dropdown Components
//!
//! Two flavors over the fixed category set: a single-select picker for the
//! edit form and a multi-select checkbox filter for the home page.

use leptos::prelude::*;

use crate::context::use_theme;
use crate::icons::{icon_glyph, CATEGORY_OPTIONS};

/// Single-select category/icon picker
#[component]
pub fn CategoryDropdown(
    /// Currently selected category label
    #[prop(into)]
    selected: Signal<String>,
    /// Called with (category, icon) when an option is picked
    #[prop(into)]
    on_select: Callback<(String, String)>,
) -> impl IntoView {
    let theme = use_theme();
    let (open, set_open) = signal(false);

    view! {
        <div class="dropdown">
            <button
                class=move || format!("dropdown-toggle {}", theme.class("dropdown-dark", "dropdown-light"))
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {move || {
                    let current = selected.get();
                    if current.is_empty() { "Category".to_string() } else { current }
                }}
                <span class="chevron">"\u{25BE}"</span>
            </button>
            <Show when=move || open.get()>
                <ul class="dropdown-menu">
                    {CATEGORY_OPTIONS.iter().map(|(label, icon)| {
                        view! {
                            <li>
                                <button
                                    class="dropdown-option"
                                    on:click=move |_| {
                                        on_select.run((label.to_string(), icon.to_string()));
                                        set_open.set(false);
                                    }
                                >
                                    <span class="option-icon">{icon_glyph(icon)}</span>
                                    {*label}
                                </button>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}

/// Multi-select category filter; an empty selection means "show all"
#[component]
pub fn FilterDropdown(
    #[prop(into)] selected: Signal<Vec<String>>,
    #[prop(into)] on_toggle: Callback<String>,
) -> impl IntoView {
    let theme = use_theme();
    let (open, set_open) = signal(false);

    view! {
        <div class="dropdown">
            <button
                class=move || format!("dropdown-toggle {}", theme.class("dropdown-dark", "dropdown-light"))
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                "Filter"
                <span class="chevron">"\u{25BE}"</span>
            </button>
            <Show when=move || open.get()>
                <ul class="dropdown-menu">
                    {CATEGORY_OPTIONS.iter().map(|(label, icon)| {
                        let checked = move || selected.get().iter().any(|s| s.as_str() == *label);
                        view! {
                            <li>
                                <label class="dropdown-option">
                                    <input
                                        type="checkbox"
                                        prop:checked=checked
                                        on:change=move |_| on_toggle.run(label.to_string())
                                    />
                                    <span class="option-icon">{icon_glyph(icon)}</span>
                                    {*label}
                                </label>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
