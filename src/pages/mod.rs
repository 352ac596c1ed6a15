//! Page Views

mod dashboard;
mod goals;
mod insights;
mod onboarding;
mod settings;
mod subscribe;

pub use dashboard::DashboardPage;
pub use goals::GoalsPage;
pub use insights::InsightsPage;
pub use onboarding::OnboardingPage;
pub use settings::SettingsPage;
pub use subscribe::SubscribePage;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Base44Backend;
use crate::context::use_app_context;
use crate::stores::GoalsStore;

/// Fetch goals on mount and whenever a reload is requested
fn load_goals(store: GoalsStore) {
    let ctx = use_app_context();
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("[APP] loading goals, trigger={}", trigger);
        spawn_local(async move {
            let _ = store.fetch_goals(&Base44Backend).await;
        });
    });
}

/// Send the browser to a hosted page (checkout, billing portal)
fn open_external(url: &str) {
    let navigated = web_sys::window().map(|window| window.location().set_href(url));
    if !matches!(navigated, Some(Ok(()))) {
        log::error!("[APP] could not open {}", url);
    }
}
