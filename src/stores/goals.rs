//! Goals Store
//!
//! Cache of the current user's goals. Mutations hit the backend first and are
//! applied locally only after the call succeeds, so a failure leaves the list
//! exactly as it was. The cache is never reconciled with concurrent edits made
//! elsewhere; the next `fetch_goals` simply replaces it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{AuthApi, GoalsApi};
use crate::error::{AppError, AppResult};
use crate::models::{Goal, GoalStatus, GoalUpdate, NewGoal};
use crate::toast::Toaster;

/// Status filter for the goal list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalFilter {
    #[default]
    All,
    Status(GoalStatus),
}

impl GoalFilter {
    pub const OPTIONS: [GoalFilter; 4] = [
        GoalFilter::All,
        GoalFilter::Status(GoalStatus::Active),
        GoalFilter::Status(GoalStatus::Completed),
        GoalFilter::Status(GoalStatus::Abandoned),
    ];

    pub fn matches(&self, goal: &Goal) -> bool {
        match self {
            GoalFilter::All => true,
            GoalFilter::Status(status) => goal.status == *status,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoalFilter::All => "All",
            GoalFilter::Status(status) => status.label(),
        }
    }
}

/// Goals matching `filter`, in list order
pub fn filter_goals(goals: &[Goal], filter: GoalFilter) -> Vec<Goal> {
    goals.iter().filter(|goal| filter.matches(goal)).cloned().collect()
}

#[derive(Clone, Debug, Default, Store)]
pub struct GoalsState {
    pub goals: Vec<Goal>,
    pub filter: GoalFilter,
    pub loading: bool,
}

// ========================
// List Helpers
// ========================

fn list_prepend(goals: &mut Vec<Goal>, goal: Goal) {
    goals.retain(|existing| existing.id != goal.id);
    goals.insert(0, goal);
}

fn list_replace(goals: &mut [Goal], updated: Goal) {
    if let Some(slot) = goals.iter_mut().find(|goal| goal.id == updated.id) {
        *slot = updated;
    }
}

fn list_remove(goals: &mut Vec<Goal>, id: &str) {
    goals.retain(|goal| goal.id != id);
}

/// Goals store, provided via context
#[derive(Clone, Copy)]
pub struct GoalsStore {
    state: Store<GoalsState>,
    toaster: Toaster,
}

impl GoalsStore {
    pub fn new(toaster: Toaster) -> Self {
        Self {
            state: Store::new(GoalsState::default()),
            toaster,
        }
    }

    pub fn goals(&self) -> Vec<Goal> {
        self.state.goals().get()
    }

    pub fn filter(&self) -> GoalFilter {
        self.state.filter().get()
    }

    pub fn set_filter(&self, filter: GoalFilter) {
        self.state.filter().set(filter);
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading().get()
    }

    pub fn filtered_goals(&self) -> Vec<Goal> {
        let filter = self.filter();
        self.state.goals().with(|goals| filter_goals(goals, filter))
    }

    pub fn active_goals(&self) -> Vec<Goal> {
        self.state
            .goals()
            .with(|goals| filter_goals(goals, GoalFilter::Status(GoalStatus::Active)))
    }

    pub fn completed_goals(&self) -> Vec<Goal> {
        self.state
            .goals()
            .with(|goals| filter_goals(goals, GoalFilter::Status(GoalStatus::Completed)))
    }

    /// Log, toast, and hand the error back to the caller
    fn report(&self, title: &str, err: AppError) -> AppError {
        log::error!("[GOALS] {}: {}", title, err);
        self.toaster.error(title, err.user_message());
        err
    }

    /// Load the current user's goals, newest first
    pub async fn fetch_goals<A>(&self, api: &A) -> AppResult<()>
    where
        A: AuthApi + GoalsApi + ?Sized,
    {
        self.state.loading().set(true);
        let result = async {
            let user = api.current_user().await?;
            api.list_goals(&user.email).await
        }
        .await;
        self.state.loading().set(false);

        match result {
            Ok(goals) => {
                log::info!("[GOALS] loaded {} goals", goals.len());
                self.state.goals().set(goals);
                Ok(())
            }
            Err(err) => Err(self.report("Couldn't load your goals", err)),
        }
    }

    pub async fn create_goal<A>(&self, api: &A, data: NewGoal) -> AppResult<Goal>
    where
        A: GoalsApi + ?Sized,
    {
        match api.create_goal(&data).await {
            Ok(goal) => {
                list_prepend(&mut self.state.goals().write(), goal.clone());
                Ok(goal)
            }
            Err(err) => Err(self.report("Couldn't create goal", err)),
        }
    }

    pub async fn update_goal<A>(&self, api: &A, id: &str, updates: GoalUpdate) -> AppResult<Goal>
    where
        A: GoalsApi + ?Sized,
    {
        match api.update_goal(id, &updates).await {
            Ok(goal) => {
                list_replace(&mut self.state.goals().write(), goal.clone());
                Ok(goal)
            }
            Err(err) => Err(self.report("Couldn't update goal", err)),
        }
    }

    pub async fn delete_goal<A>(&self, api: &A, id: &str) -> AppResult<()>
    where
        A: GoalsApi + ?Sized,
    {
        match api.delete_goal(id).await {
            Ok(()) => {
                list_remove(&mut self.state.goals().write(), id);
                Ok(())
            }
            Err(err) => Err(self.report("Couldn't delete goal", err)),
        }
    }

    #[cfg(test)]
    pub(crate) fn seed(&self, goals: Vec<Goal>) {
        self.state.goals().set(goals);
    }
}

pub fn use_goals_store() -> GoalsStore {
    expect_context::<GoalsStore>()
}
