//! Theme Picker Component
//!
//! Accent color swatches.

use leptos::prelude::*;

use crate::theme::{AccentTheme, ThemeContext};

#[component]
pub fn ThemePicker(theme: ThemeContext) -> impl IntoView {
    view! {
        <div class="theme-picker" role="radiogroup">
            {AccentTheme::ALL.into_iter().map(|accent| view! {
                <button
                    class=move || if theme.active_theme() == accent { "swatch selected" } else { "swatch" }
                    style=format!("background-color: {};", accent.hex())
                    title=accent.label()
                    role="radio"
                    aria-checked=move || (theme.active_theme() == accent).to_string()
                    on:click=move |_| theme.set_theme(accent)
                ></button>
            }).collect_view()}
        </div>
    }
}
