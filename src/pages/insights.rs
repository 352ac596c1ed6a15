//! Insights Page
//!
//! On-demand AI coaching feedback over the user's goals.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Base44Backend;
use crate::context::use_app_context;
use crate::insights::{generate_insights, Insights};
use crate::toast::use_toaster;
use crate::transition::DelayedSpinner;

#[component]
pub fn InsightsPage() -> impl IntoView {
    let ctx = use_app_context();
    let toaster = use_toaster();
    let (insights, set_insights) = signal::<Option<Insights>>(None);
    let (generating, set_generating) = signal(false);

    let generate = move |_| {
        let Some(user) = ctx.user.get_untracked() else {
            return;
        };
        set_generating.set(true);
        spawn_local(async move {
            match generate_insights(&Base44Backend, &user.email, Utc::now()).await {
                Ok(result) => set_insights.set(Some(result)),
                Err(err) => {
                    log::error!("[INSIGHTS] generation failed: {}", err);
                    toaster.error("Couldn't generate insights", err.user_message());
                }
            }
            set_generating.set(false);
        });
    };

    view! {
        <section class="insights-page">
            <h1>"Insights"</h1>
            <p class="page-intro">"Personal feedback on your goals, generated on demand."</p>
            <button class="btn btn-primary" disabled=move || generating.get() on:click=generate>
                {move || if insights.get().is_some() { "Regenerate" } else { "Generate insights" }}
            </button>

            <Show when=move || generating.get()>
                <DelayedSpinner label="Thinking about your goals..." />
            </Show>

            {move || insights.get().map(|result| view! {
                <article class="insight-card">
                    <h2>"Summary"</h2>
                    <p>{result.summary}</p>
                    <h3>"Focus on"</h3>
                    <p class="insight-focus">{result.focus_area}</p>
                    <h3>"Next steps"</h3>
                    <ul>
                        {result.recommendations.into_iter().map(|step| view! { <li>{step}</li> }).collect_view()}
                    </ul>
                </article>
            })}
        </section>
    }
}
