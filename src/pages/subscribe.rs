//! Subscription Page
//!
//! Checkout for new subscribers, billing portal for existing ones.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::open_external;
use crate::api::{Base44Backend, BillingApi, BillingPlan};
use crate::context::use_app_context;
use crate::toast::use_toaster;

#[component]
pub fn SubscribePage() -> impl IntoView {
    let ctx = use_app_context();
    let toaster = use_toaster();
    let (pending, set_pending) = signal(false);

    let subscribed = move || {
        ctx.user
            .get()
            .map(|user| user.has_active_subscription())
            .unwrap_or(false)
    };

    let checkout = move |plan: BillingPlan| {
        set_pending.set(true);
        spawn_local(async move {
            match Base44Backend.create_checkout_session(plan).await {
                Ok(session) => open_external(&session.url),
                Err(err) => {
                    log::error!("[BILLING] checkout failed: {}", err);
                    toaster.error("Couldn't start checkout", err.user_message());
                    set_pending.set(false);
                }
            }
        });
    };

    let manage = move |_| {
        set_pending.set(true);
        spawn_local(async move {
            match Base44Backend.create_portal_session().await {
                Ok(session) => open_external(&session.url),
                Err(err) => {
                    log::error!("[BILLING] portal failed: {}", err);
                    toaster.error("Couldn't open billing", err.user_message());
                    set_pending.set(false);
                }
            }
        });
    };

    view! {
        <section class="subscribe-page">
            <h1>"Evyma Premium"</h1>
            <Show
                when=subscribed
                fallback=move || view! {
                    <p class="page-intro">"Unlock AI insights and coaching on every goal."</p>
                    <div class="plan-row">
                        {[BillingPlan::Monthly, BillingPlan::Yearly].into_iter().map(|plan| view! {
                            <button
                                class="plan-card"
                                disabled=move || pending.get()
                                on:click=move |_| checkout(plan)
                            >
                                <span class="plan-name">{plan.label()}</span>
                            </button>
                        }).collect_view()}
                    </div>
                }
            >
                <p class="page-intro">"Your subscription is active."</p>
                <button class="btn" disabled=move || pending.get() on:click=manage>
                    "Manage billing"
                </button>
            </Show>
        </section>
    }
}
