//! Goal Card Component
//!
//! A single goal with progress controls and status actions. Deleting asks
//! for confirmation in place of the action row.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Base44Backend;
use crate::models::{Goal, GoalStatus, GoalUpdate};
use crate::stores::GoalsStore;

const PROGRESS_STEP: u8 = 10;
const PROMPT_TITLE_CHARS: usize = 40;

/// Confirmation text naming the goal, long titles cut with an ellipsis
fn delete_prompt(title: &str) -> String {
    let title = title.trim();
    let shown: String = title.chars().take(PROMPT_TITLE_CHARS).collect();
    if shown.len() < title.len() {
        format!("Delete \u{201c}{}\u{2026}\u{201d}?", shown.trim_end())
    } else {
        format!("Delete \u{201c}{}\u{201d}?", shown)
    }
}

#[component]
pub fn GoalCard(goal: Goal, store: GoalsStore) -> impl IntoView {
    let id = StoredValue::new(goal.id.clone());
    let status = goal.status;
    let progress = goal.progress;
    let prompt = delete_prompt(&goal.title);
    let (confirming, set_confirming) = signal(false);

    let apply = move |updates: GoalUpdate| {
        let id = id.get_value();
        spawn_local(async move {
            let _ = store.update_goal(&Base44Backend, &id, updates).await;
        });
    };

    let delete = move |_| {
        set_confirming.set(false);
        let id = id.get_value();
        spawn_local(async move {
            let _ = store.delete_goal(&Base44Backend, &id).await;
        });
    };

    let card_class = format!("goal-card status-{}", status.as_str());

    view! {
        <article class=card_class>
            <header class="goal-card-header">
                <h3 class="goal-title">{goal.title}</h3>
                <span class=format!("status-badge {}", status.as_str())>{status.label()}</span>
            </header>

            {goal.description.map(|text| view! { <p class="goal-description">{text}</p> })}

            <div class="goal-meta">
                {goal.category.map(|category| view! { <span class="goal-category">{category}</span> })}
                {goal.target_date.map(|date| view! { <span class="goal-target">"Due " {date}</span> })}
            </div>

            <div class="progress">
                <div class="progress-track">
                    <div class="progress-fill" style=format!("width: {}%;", progress)></div>
                </div>
                <span class="progress-label">{progress} "%"</span>
            </div>

            <Show when=move || !confirming.get() fallback=move || view! {
                <footer class="goal-actions delete-confirm" role="alertdialog">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button class="btn btn-small btn-danger" on:click=delete>"Delete goal"</button>
                    <button class="btn btn-small" on:click=move |_| set_confirming.set(false)>"Keep"</button>
                </footer>
            }>
                <footer class="goal-actions">
                    {match status {
                        GoalStatus::Active => view! {
                            <button
                                class="btn btn-small"
                                disabled={progress == 0}
                                on:click=move |_| apply(GoalUpdate::progress(progress.saturating_sub(PROGRESS_STEP)))
                            >
                                "−"
                            </button>
                            <button
                                class="btn btn-small"
                                on:click=move |_| apply(GoalUpdate::progress(progress.saturating_add(PROGRESS_STEP)))
                            >
                                "+"
                            </button>
                            <button class="btn btn-small btn-primary" on:click=move |_| apply(GoalUpdate::progress(100))>
                                "Complete"
                            </button>
                            <button class="btn btn-small" on:click=move |_| apply(GoalUpdate::status(GoalStatus::Abandoned))>
                                "Abandon"
                            </button>
                        }.into_any(),
                        GoalStatus::Completed | GoalStatus::Abandoned => view! {
                            <button class="btn btn-small" on:click=move |_| apply(GoalUpdate::status(GoalStatus::Active))>
                                "Reactivate"
                            </button>
                        }.into_any(),
                    }}
                    <button class="btn btn-small btn-danger" on:click=move |_| set_confirming.set(true)>
                        "Delete"
                    </button>
                </footer>
            </Show>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_the_goal() {
        assert_eq!(delete_prompt("  Run a 10k "), "Delete \u{201c}Run a 10k\u{201d}?");
    }

    #[test]
    fn prompt_cuts_long_titles() {
        let title = "Learn enough Portuguese to order dinner without pointing at the menu";
        let prompt = delete_prompt(title);
        assert!(prompt.starts_with("Delete \u{201c}Learn enough Portuguese to order dinner"));
        assert!(prompt.ends_with("\u{2026}\u{201d}?"));
        assert!(prompt.chars().count() < title.chars().count());
    }
}
