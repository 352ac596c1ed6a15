//! Checkout and Billing Portal Functions

use async_trait::async_trait;
use base44_client::functions;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{Base44Backend, BillingApi};
use crate::error::AppResult;

/// Subscription plan offered at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPlan {
    Monthly,
    Yearly,
}

impl BillingPlan {
    pub fn label(&self) -> &'static str {
        match self {
            BillingPlan::Monthly => "Monthly",
            BillingPlan::Yearly => "Yearly",
        }
    }
}

/// Hosted page to send the browser to
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RedirectSession {
    pub url: String,
}

#[async_trait(?Send)]
impl BillingApi for Base44Backend {
    async fn create_checkout_session(&self, plan: BillingPlan) -> AppResult<RedirectSession> {
        Ok(functions::invoke("createCheckoutSession", &json!({ "plan": plan })).await?)
    }

    async fn create_portal_session(&self) -> AppResult<RedirectSession> {
        Ok(functions::invoke("createPortalSession", &json!({})).await?)
    }
}
