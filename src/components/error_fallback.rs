//! Top-Level Error Boundary
//!
//! Catches errors raised while rendering and offers a retry or a full reload.

use leptos::prelude::*;

#[component]
pub fn AppErrorBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| {
            let retry_errors = errors.clone();
            view! {
                <div class="error-fallback" role="alert">
                    <h2>"Something went wrong"</h2>
                    <ul class="error-list">
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, err)| view! { <li>{err.to_string()}</li> })
                                .collect_view()
                        }}
                    </ul>
                    <div class="error-actions">
                        <button
                            class="btn btn-primary"
                            on:click=move |_| {
                                log::info!("[APP] retrying after render error");
                                retry_errors.set(Errors::default());
                            }
                        >
                            "Try again"
                        </button>
                        <button class="btn" on:click=|_| reload_page()>
                            "Reload page"
                        </button>
                    </div>
                </div>
            }
        }>
            {children()}
        </ErrorBoundary>
    }
}

pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().reload() {
            log::error!("[APP] reload failed: {:?}", err);
        }
    }
}
