//! Page Transitions and Delayed Indicators
//!
//! Both are driven by one-shot visibility timers: content mounts hidden and a
//! timer flips it visible, so CSS can animate the change and short waits never
//! flash a spinner.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;

/// Signal that turns true `delay_ms` after creation
fn visible_after(delay_ms: u32) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        // The owner may be gone if the page changed meanwhile
        let _ = set_visible.try_set(true);
    });
    visible
}

/// Fade-in wrapper, re-mounted for each page
#[component]
pub fn PageTransition(children: Children) -> impl IntoView {
    let delay = use_context::<AppConfig>().unwrap_or_default().page_transition_ms;
    let visible = visible_after(delay);

    view! {
        <div class=move || if visible.get() { "page-transition page-visible" } else { "page-transition" }>
            {children()}
        </div>
    }
}

/// Loading indicator that only shows once loading has taken a noticeable time
#[component]
pub fn DelayedSpinner(#[prop(into, optional)] label: Option<String>) -> impl IntoView {
    let delay = use_context::<AppConfig>().unwrap_or_default().spinner_delay_ms;
    let visible = visible_after(delay);

    view! {
        <Show when=move || visible.get()>
            <div class="loading-indicator" role="progressbar">
                <div class="spinner"></div>
                {label.clone().map(|text| view! { <p class="loading-label">{text}</p> })}
            </div>
        </Show>
    }
}
