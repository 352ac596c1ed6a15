//! In-memory backend for tests

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use base44_client::Base44Error;
use serde_json::{Map, Value};

use crate::api::{AuthApi, BillingApi, BillingPlan, GoalsApi, LlmApi, RedirectSession};
use crate::error::{AppError, AppResult};
use crate::models::{Goal, GoalStatus, GoalUpdate, NewGoal, User};

pub fn goal(id: &str, status: GoalStatus) -> Goal {
    Goal {
        id: id.to_string(),
        title: format!("Goal {}", id),
        description: None,
        category: None,
        target_date: None,
        status,
        progress: if status == GoalStatus::Completed { 100 } else { 0 },
        created_by: "me@evyma.app".to_string(),
        created_date: "2024-01-01T00:00:00.000Z".to_string(),
        updated_date: None,
        extra: Map::new(),
    }
}

impl Goal {
    pub fn owned_by(mut self, email: &str) -> Self {
        self.created_by = email.to_string();
        self
    }
}

pub fn user(email: &str) -> User {
    User {
        id: "user-1".to_string(),
        email: email.to_string(),
        full_name: Some("Test User".to_string()),
        role: Some("user".to_string()),
        onboarding_completed: true,
        subscription_status: Some("active".to_string()),
    }
}

#[derive(Default)]
pub struct FakeBackend {
    user: RefCell<Option<User>>,
    goals: RefCell<Vec<Goal>>,
    next_id: Cell<u32>,
    failing: Cell<bool>,
    llm_reply: RefCell<Value>,
    pub prompts: RefCell<Vec<String>>,
}

impl FakeBackend {
    pub fn signed_out() -> Self {
        Self {
            next_id: Cell::new(100),
            ..Default::default()
        }
    }

    pub fn signed_in(email: &str) -> Self {
        let backend = Self::signed_out();
        backend.set_user(Some(user(email)));
        backend
    }

    pub fn set_user(&self, user: Option<User>) {
        *self.user.borrow_mut() = user;
    }

    pub fn fail_requests(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn reply_with(&self, reply: Value) {
        *self.llm_reply.borrow_mut() = reply;
    }

    /// Store a goal server-side, returning it
    pub fn insert_goal(&self, goal: Goal) -> Goal {
        self.goals.borrow_mut().push(goal.clone());
        goal
    }

    fn check(&self) -> AppResult<()> {
        if self.failing.get() {
            Err(AppError::Backend(Base44Error::from_parts(Some(500), "backend unavailable")))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeBackend {
    async fn is_authenticated(&self) -> AppResult<bool> {
        self.check()?;
        Ok(self.user.borrow().is_some())
    }

    async fn current_user(&self) -> AppResult<User> {
        self.check()?;
        self.user
            .borrow()
            .clone()
            .ok_or(AppError::Backend(Base44Error::Unauthorized))
    }

    async fn complete_onboarding(&self) -> AppResult<User> {
        self.check()?;
        let mut user = self.user.borrow_mut();
        let user = user.as_mut().ok_or(AppError::Backend(Base44Error::Unauthorized))?;
        user.onboarding_completed = true;
        Ok(user.clone())
    }

    fn redirect_to_login(&self, _next_url: Option<&str>) -> AppResult<()> {
        self.check()
    }

    fn logout(&self) -> AppResult<()> {
        self.set_user(None);
        Ok(())
    }
}

#[async_trait(?Send)]
impl GoalsApi for FakeBackend {
    async fn list_goals(&self, owner_email: &str) -> AppResult<Vec<Goal>> {
        self.check()?;
        // Insertion order stands in for creation time
        Ok(self
            .goals
            .borrow()
            .iter()
            .rev()
            .filter(|goal| goal.created_by == owner_email)
            .cloned()
            .collect())
    }

    async fn create_goal(&self, data: &NewGoal) -> AppResult<Goal> {
        self.check()?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let owner = self
            .user
            .borrow()
            .as_ref()
            .map(|user| user.email.clone())
            .unwrap_or_default();
        let goal = Goal {
            id: id.to_string(),
            title: data.title.clone(),
            description: data.description.clone(),
            category: data.category.clone(),
            target_date: data.target_date.clone(),
            status: data.status,
            progress: data.progress,
            created_by: owner,
            created_date: "2024-02-01T00:00:00.000Z".to_string(),
            updated_date: None,
            extra: Map::new(),
        };
        Ok(self.insert_goal(goal))
    }

    async fn update_goal(&self, id: &str, updates: &GoalUpdate) -> AppResult<Goal> {
        self.check()?;
        let mut goals = self.goals.borrow_mut();
        let goal = goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or_else(|| AppError::Backend(Base44Error::from_parts(Some(404), "not found")))?;
        if let Some(title) = &updates.title {
            goal.title = title.clone();
        }
        if let Some(description) = &updates.description {
            goal.description = Some(description.clone());
        }
        if let Some(category) = &updates.category {
            goal.category = Some(category.clone());
        }
        if let Some(target_date) = &updates.target_date {
            goal.target_date = Some(target_date.clone());
        }
        if let Some(status) = updates.status {
            goal.status = status;
        }
        if let Some(progress) = updates.progress {
            goal.progress = progress;
        }
        goal.updated_date = Some("2024-03-01T00:00:00.000Z".to_string());
        Ok(goal.clone())
    }

    async fn delete_goal(&self, id: &str) -> AppResult<()> {
        self.check()?;
        self.goals.borrow_mut().retain(|goal| goal.id != id);
        Ok(())
    }
}

#[async_trait(?Send)]
impl BillingApi for FakeBackend {
    async fn create_checkout_session(&self, plan: BillingPlan) -> AppResult<RedirectSession> {
        self.check()?;
        Ok(RedirectSession {
            url: format!("https://checkout.test/{}", plan.label().to_lowercase()),
        })
    }

    async fn create_portal_session(&self) -> AppResult<RedirectSession> {
        self.check()?;
        Ok(RedirectSession {
            url: "https://billing.test/portal".to_string(),
        })
    }
}

#[async_trait(?Send)]
impl LlmApi for FakeBackend {
    async fn generate(&self, prompt: &str, _schema: &Value) -> AppResult<Value> {
        self.check()?;
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(self.llm_reply.borrow().clone())
    }
}
