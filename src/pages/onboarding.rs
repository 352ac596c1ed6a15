//! Onboarding Page
//!
//! Collects an optional first goal and marks onboarding complete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{AuthApi, Base44Backend};
use crate::context::use_app_context;
use crate::models::NewGoal;
use crate::router::{use_navigator, Route};
use crate::stores::use_goals_store;
use crate::toast::use_toaster;

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigator = use_navigator();
    let goals = use_goals_store();
    let toaster = use_toaster();

    let (first_goal, set_first_goal) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let finish = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let title = first_goal.get().trim().to_string();
        set_submitting.set(true);

        spawn_local(async move {
            let api = Base44Backend;
            if !title.is_empty() && goals.create_goal(&api, NewGoal::titled(title)).await.is_err() {
                set_submitting.set(false);
                return;
            }
            match api.complete_onboarding().await {
                Ok(user) => {
                    log::info!("[APP] onboarding complete for {}", user.email);
                    ctx.set_user(Some(user));
                    navigator.navigate(Route::Dashboard);
                }
                Err(err) => {
                    log::error!("[APP] onboarding update failed: {}", err);
                    toaster.error("Couldn't finish setup", err.user_message());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="onboarding-page">
            <h1>"Welcome to Evyma"</h1>
            <p class="page-intro">"Let's start with one thing you want to achieve. You can add more later."</p>
            <form class="onboarding-form" on:submit=finish>
                <input
                    type="text"
                    placeholder="e.g. Run a 10k by summer"
                    prop:value=move || first_goal.get()
                    on:input=move |ev| set_first_goal.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if first_goal.get().trim().is_empty() { "Skip for now" } else { "Get started" }}
                </button>
            </form>
        </section>
    }
}
