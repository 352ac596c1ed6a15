//! Toast Notifications
//!
//! Transient user-facing messages. Stores push into the [`Toaster`];
//! [`ToastViewport`] renders the queue and expires entries.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

/// Toast queue, provided via context
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn push(&self, kind: ToastKind, title: impl Into<String>, description: Option<String>) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                title: title.into(),
                description,
            })
        });
        id
    }

    pub fn success(&self, title: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, title, None)
    }

    pub fn info(&self, title: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, title, None)
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, title, Some(description.into()))
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// A single toast; removes itself after the configured duration
#[component]
fn ToastEntry(toast: Toast) -> impl IntoView {
    let toaster = use_toaster();
    let duration = use_context::<AppConfig>().unwrap_or_default().toast_duration_ms;
    let id = toast.id;

    spawn_local(async move {
        TimeoutFuture::new(duration).await;
        toaster.dismiss(id);
    });

    view! {
        <div class=toast.kind.class() role="status">
            <div class="toast-body">
                <div class="toast-title">{toast.title}</div>
                {toast.description.map(|text| view! { <div class="toast-description">{text}</div> })}
            </div>
            <button class="toast-close" on:click=move |_| toaster.dismiss(id)>"×"</button>
        </div>
    }
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-viewport">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast| view! { <ToastEntry toast=toast /> }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_dismiss_targets_one() {
        let toaster = Toaster::new();
        let first = toaster.success("Saved");
        let second = toaster.error("Failed", "boom");
        assert_ne!(first, second);

        toaster.dismiss(first);
        let remaining = toaster.toasts().get_untracked();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].kind, ToastKind::Error);
        assert_eq!(remaining[0].description.as_deref(), Some("boom"));
    }
}
