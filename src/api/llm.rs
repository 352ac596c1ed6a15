//! InvokeLLM over Base44

use async_trait::async_trait;
use base44_client::integrations;

use super::{Base44Backend, LlmApi};
use crate::error::AppResult;

#[async_trait(?Send)]
impl LlmApi for Base44Backend {
    async fn generate(&self, prompt: &str, schema: &serde_json::Value) -> AppResult<serde_json::Value> {
        Ok(integrations::invoke_llm(prompt, schema).await?)
    }
}
