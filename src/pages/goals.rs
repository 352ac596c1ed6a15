//! Goals Page
//!
//! Full goal list with creation form and status filter.

use leptos::prelude::*;

use super::load_goals;
use crate::components::{GoalCard, GoalFilterBar, NewGoalForm};
use crate::context::use_app_context;
use crate::stores::use_goals_store;
use crate::transition::DelayedSpinner;

#[component]
pub fn GoalsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_goals_store();
    load_goals(store);

    view! {
        <section class="goals-page">
            <header class="page-header">
                <h1>"Your goals"</h1>
                <button class="btn" title="Refresh" on:click=move |_| ctx.reload()>"↻"</button>
            </header>
            <NewGoalForm store=store />
            <GoalFilterBar store=store />

            <Show when=move || !store.is_loading() fallback=|| view! { <DelayedSpinner label="Loading goals..." /> }>
                <Show
                    when=move || !store.filtered_goals().is_empty()
                    fallback=move || view! {
                        <p class="empty-state">{move || format!("No {} goals.", store.filter().label().to_lowercase())}</p>
                    }
                >
                    <div class="goal-list">
                        <For
                            each=move || store.filtered_goals()
                            key=|goal| (goal.id.clone(), goal.status, goal.progress, goal.updated_date.clone())
                            children=move |goal| view! { <GoalCard goal=goal store=store /> }
                        />
                    </div>
                </Show>
            </Show>
        </section>
    }
}
