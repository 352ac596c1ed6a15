//! Goal Entity over Base44

use async_trait::async_trait;
use base44_client::{Entity, Sort};
use serde::Serialize;

use super::{Base44Backend, GoalsApi};
use crate::error::AppResult;
use crate::models::{Goal, GoalUpdate, NewGoal};

const GOALS: Entity<Goal> = Entity::new("Goal");

#[derive(Serialize)]
struct OwnerQuery<'a> {
    created_by: &'a str,
}

#[async_trait(?Send)]
impl GoalsApi for Base44Backend {
    async fn list_goals(&self, owner_email: &str) -> AppResult<Vec<Goal>> {
        let query = OwnerQuery { created_by: owner_email };
        Ok(GOALS.filter(&query, Some(Sort::Desc("created_date")), None).await?)
    }

    async fn create_goal(&self, data: &NewGoal) -> AppResult<Goal> {
        Ok(GOALS.create(data).await?)
    }

    async fn update_goal(&self, id: &str, updates: &GoalUpdate) -> AppResult<Goal> {
        Ok(GOALS.update(id, updates).await?)
    }

    async fn delete_goal(&self, id: &str) -> AppResult<()> {
        Ok(GOALS.delete(id).await?)
    }
}
