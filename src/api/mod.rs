//! Backend API Seam
//!
//! The app talks to its backend only through these traits. [`Base44Backend`]
//! implements them on top of the Base44 SDK; tests supply an in-memory fake.

mod auth;
mod billing;
mod goals;
mod llm;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{Goal, GoalUpdate, NewGoal, User};

pub use billing::{BillingPlan, RedirectSession};

/// Session and current-user access
#[async_trait(?Send)]
pub trait AuthApi {
    async fn is_authenticated(&self) -> AppResult<bool>;

    async fn current_user(&self) -> AppResult<User>;

    async fn complete_onboarding(&self) -> AppResult<User>;

    /// Hand the browser over to the hosted login flow
    fn redirect_to_login(&self, next_url: Option<&str>) -> AppResult<()>;

    fn logout(&self) -> AppResult<()>;
}

/// CRUD over the `Goal` entity
#[async_trait(?Send)]
pub trait GoalsApi {
    /// Goals created by `owner_email`, newest first
    async fn list_goals(&self, owner_email: &str) -> AppResult<Vec<Goal>>;

    async fn create_goal(&self, data: &NewGoal) -> AppResult<Goal>;

    async fn update_goal(&self, id: &str, updates: &GoalUpdate) -> AppResult<Goal>;

    async fn delete_goal(&self, id: &str) -> AppResult<()>;
}

/// Subscription checkout / billing portal functions
#[async_trait(?Send)]
pub trait BillingApi {
    async fn create_checkout_session(&self, plan: BillingPlan) -> AppResult<RedirectSession>;

    async fn create_portal_session(&self) -> AppResult<RedirectSession>;
}

/// Schema-constrained text generation
#[async_trait(?Send)]
pub trait LlmApi {
    async fn generate(&self, prompt: &str, schema: &serde_json::Value) -> AppResult<serde_json::Value>;
}

/// Backend implementation over the Base44 JS SDK
#[derive(Debug, Clone, Copy, Default)]
pub struct Base44Backend;
