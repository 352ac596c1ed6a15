//! Auth over Base44

use async_trait::async_trait;
use base44_client::auth;
use serde_json::json;

use super::{AuthApi, Base44Backend};
use crate::error::AppResult;
use crate::models::User;

#[async_trait(?Send)]
impl AuthApi for Base44Backend {
    async fn is_authenticated(&self) -> AppResult<bool> {
        Ok(auth::is_authenticated().await?)
    }

    async fn current_user(&self) -> AppResult<User> {
        Ok(auth::me().await?)
    }

    async fn complete_onboarding(&self) -> AppResult<User> {
        Ok(auth::update_me(&json!({ "onboarding_completed": true })).await?)
    }

    fn redirect_to_login(&self, next_url: Option<&str>) -> AppResult<()> {
        Ok(auth::redirect_to_login(next_url)?)
    }

    fn logout(&self) -> AppResult<()> {
        Ok(auth::logout(None)?)
    }
}
