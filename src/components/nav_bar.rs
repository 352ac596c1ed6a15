//! Navigation Bar Component
//!
//! Brand, page links, dark mode toggle and sign-out.

use leptos::prelude::*;

use crate::api::{AuthApi, Base44Backend};
use crate::context::use_app_context;
use crate::router::{use_navigator, Route};
use crate::theme::use_theme;

#[component]
pub fn NavBar() -> impl IntoView {
    let navigator = use_navigator();
    let theme = use_theme();
    let ctx = use_app_context();

    let logout = move |_| {
        ctx.set_user(None);
        if let Err(err) = Base44Backend.logout() {
            log::error!("[APP] logout failed: {}", err);
        }
    };

    view! {
        <nav class="nav-bar">
            <div class="nav-brand" on:click=move |_| navigator.navigate(Route::Dashboard)>
                <span class="brand-mark"></span>
                <span class="brand-name">"Evyma"</span>
            </div>

            <div class="nav-links">
                {Route::NAV.into_iter().map(|route| view! {
                    <button
                        class=move || if navigator.current() == route { "nav-link active" } else { "nav-link" }
                        on:click=move |_| navigator.navigate(route)
                    >
                        {route.title()}
                    </button>
                }).collect_view()}
            </div>

            <div class="nav-controls">
                <button
                    class="nav-icon-btn"
                    title=move || if theme.is_dark_mode() { "Switch to light mode" } else { "Switch to dark mode" }
                    on:click=move |_| theme.toggle_dark_mode()
                >
                    {move || if theme.is_dark_mode() { "☀" } else { "☾" }}
                </button>
                {move || ctx.user.get().map(|user| view! {
                    <span class="nav-user">{user.first_name().to_string()}</span>
                })}
                <button class="nav-link" on:click=logout>"Sign out"</button>
            </div>
        </nav>
    }
}
