//! Goal Filter Bar Component
//!
//! Status filter buttons with per-status counts.

use leptos::prelude::*;

use crate::stores::{filter_goals, GoalFilter, GoalsStore};

#[component]
pub fn GoalFilterBar(store: GoalsStore) -> impl IntoView {
    view! {
        <div class="filter-bar">
            {GoalFilter::OPTIONS.into_iter().map(|option| {
                let is_selected = move || store.filter() == option;
                let count = move || filter_goals(&store.goals(), option).len();
                view! {
                    <button
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| store.set_filter(option)
                    >
                        {option.label()}
                        <span class="filter-count">{count}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
