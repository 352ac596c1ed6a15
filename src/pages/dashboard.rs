//! Dashboard Page
//!
//! Greeting, goal statistics, the active goal grid and app shortcuts.

use leptos::prelude::*;

use super::load_goals;
use crate::components::GoalCard;
use crate::context::use_app_context;
use crate::models::{Goal, GoalStatus};
use crate::router::{use_navigator, Route};
use crate::stores::{use_goals_store, use_settings_store};
use crate::transition::DelayedSpinner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GoalStats {
    pub active: usize,
    pub completed: usize,
    pub abandoned: usize,
    /// Mean progress of active goals, rounded down
    pub average_progress: u8,
}

impl GoalStats {
    pub fn from_goals(goals: &[Goal]) -> Self {
        let mut stats = GoalStats::default();
        let mut progress_sum = 0u32;
        for goal in goals {
            match goal.status {
                GoalStatus::Active => {
                    stats.active += 1;
                    progress_sum += u32::from(goal.progress);
                }
                GoalStatus::Completed => stats.completed += 1,
                GoalStatus::Abandoned => stats.abandoned += 1,
            }
        }
        if stats.active > 0 {
            stats.average_progress = (progress_sum / stats.active as u32) as u8;
        }
        stats
    }
}

/// Grid template for the user's column preference (kept within 1..=6 on screen)
fn grid_style(columns: i32) -> String {
    format!("grid-template-columns: repeat({}, minmax(0, 1fr));", columns.clamp(1, 6))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigator = use_navigator();
    let goals = use_goals_store();
    let settings = use_settings_store();
    load_goals(goals);

    let stats = Memo::new(move |_| GoalStats::from_goals(&goals.goals()));
    let greeting = move || {
        ctx.user
            .get()
            .map(|user| format!("Welcome back, {}", user.first_name()))
            .unwrap_or_else(|| "Welcome back".to_string())
    };

    view! {
        <section class="dashboard">
            <h1>{greeting}</h1>

            <div class="stat-row">
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().active}</span>
                    <span class="stat-label">"Active goals"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().completed}</span>
                    <span class="stat-label">"Completed"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || format!("{}%", stats.get().average_progress)}</span>
                    <span class="stat-label">"Average progress"</span>
                </div>
            </div>

            <h2>"In progress"</h2>
            <Show when=move || !goals.is_loading() fallback=|| view! { <DelayedSpinner /> }>
                <Show
                    when=move || !goals.active_goals().is_empty()
                    fallback=move || view! {
                        <div class="empty-state">
                            <p>"No active goals yet."</p>
                            <button class="btn btn-primary" on:click=move |_| navigator.navigate(Route::Goals)>
                                "Set a goal"
                            </button>
                        </div>
                    }
                >
                    <div class="goal-grid" style=move || grid_style(settings.grid_columns())>
                        {move || goals.active_goals().into_iter().map(|goal| view! {
                            <GoalCard goal=goal store=goals />
                        }).collect_view()}
                    </div>
                </Show>
            </Show>

            <Show when=move || settings.show_apps()>
                <h2>"Apps"</h2>
                <div class="app-shortcuts">
                    {[Route::Goals, Route::Insights, Route::Settings].into_iter().map(|route| view! {
                        <button class="app-tile" on:click=move |_| navigator.navigate(route)>
                            {route.title()}
                        </button>
                    }).collect_view()}
                </div>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::goal;

    #[test]
    fn stats_count_by_status_and_average_active_progress() {
        let mut first = goal("1", GoalStatus::Active);
        first.progress = 30;
        let mut second = goal("2", GoalStatus::Active);
        second.progress = 45;
        let goals = vec![first, second, goal("3", GoalStatus::Completed), goal("4", GoalStatus::Abandoned)];

        let stats = GoalStats::from_goals(&goals);

        assert_eq!(
            stats,
            GoalStats {
                active: 2,
                completed: 1,
                abandoned: 1,
                average_progress: 37,
            }
        );
    }

    #[test]
    fn no_active_goals_means_zero_average() {
        assert_eq!(GoalStats::from_goals(&[]).average_progress, 0);
    }

    #[test]
    fn grid_columns_are_clamped_for_layout_only() {
        assert!(grid_style(0).contains("repeat(1,"));
        assert!(grid_style(12).contains("repeat(6,"));
        assert!(grid_style(3).contains("repeat(3,"));
    }
}
