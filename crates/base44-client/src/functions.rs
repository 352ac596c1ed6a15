//! Serverless Function Bindings
//!
//! `base44.functions.invoke(name, payload)`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::js::{call, from_js, namespace, to_js};
use crate::Result;

/// Invoke a named backend function.
///
/// The SDK wraps function results in an HTTP response (`{ data, status }`); the
/// `data` payload is unwrapped when present.
pub async fn invoke<P, T>(name: &str, payload: &P) -> Result<T>
where
    P: Serialize + ?Sized,
    T: DeserializeOwned,
{
    log::debug!("[BASE44] functions.invoke {}", name);
    let functions = namespace(&["functions"])?;
    let response = call(&functions, "invoke", &[JsValue::from_str(name), to_js(payload)?]).await?;
    let data = js_sys::Reflect::get(&response, &JsValue::from_str("data"))
        .ok()
        .filter(|d| !d.is_undefined())
        .unwrap_or(response);
    from_js(data)
}
