//! Integration Bindings
//!
//! `base44.integrations.Core.InvokeLLM`: schema-constrained generation.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::js::{call, from_js, namespace, to_js};
use crate::Result;

#[derive(Debug, Serialize)]
struct InvokeLlmArgs<'a> {
    prompt: &'a str,
    response_json_schema: &'a serde_json::Value,
}

/// Run a prompt and parse the JSON object the model returns against `schema`
pub async fn invoke_llm<T: DeserializeOwned>(
    prompt: &str,
    schema: &serde_json::Value,
) -> Result<T> {
    log::debug!("[BASE44] InvokeLLM ({} chars)", prompt.len());
    let core = namespace(&["integrations", "Core"])?;
    let args = InvokeLlmArgs {
        prompt,
        response_json_schema: schema,
    };
    let result = call(&core, "InvokeLLM", &[to_js(&args)?]).await?;
    from_js(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_use_sdk_field_names() {
        let schema = serde_json::json!({ "type": "object" });
        let args = InvokeLlmArgs {
            prompt: "hi",
            response_json_schema: &schema,
        };
        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(value["prompt"], "hi");
        assert_eq!(value["response_json_schema"]["type"], "object");
    }
}
