//! Client Bootstrap
//!
//! The host page starts loading the SDK module and leaves the pending import
//! on `window.base44Sdk`. [`connect`] waits for it, creates the client for the
//! configured app and publishes it as `window.base44`.

use js_sys::{Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::js::{self, GLOBAL_CLIENT};
use crate::{Base44Error, Result};

/// Global holding the SDK module (or a promise of it)
pub(crate) const GLOBAL_SDK: &str = "base44Sdk";

/// Options passed to `createClient`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientOptions<'a> {
    app_id: &'a str,
}

fn client_options(app_id: &str) -> Result<ClientOptions<'_>> {
    let app_id = app_id.trim();
    if app_id.is_empty() {
        return Err(Base44Error::MissingAppId);
    }
    Ok(ClientOptions { app_id })
}

/// Create `window.base44` once the SDK module has loaded.
///
/// A client the page already created is kept as is.
pub async fn connect(app_id: &str) -> Result<()> {
    let window = web_sys::window().ok_or(Base44Error::NoWindow)?;
    if js::is_set(&window, GLOBAL_CLIENT)? {
        log::debug!("[BASE44] using client created by the host page");
        return Ok(());
    }
    let options = client_options(app_id)?;

    let pending = Reflect::get(&window, &JsValue::from_str(GLOBAL_SDK)).map_err(Base44Error::from_js)?;
    if pending.is_undefined() || pending.is_null() {
        return Err(Base44Error::NotInitialized);
    }
    let sdk = JsFuture::from(Promise::resolve(&pending))
        .await
        .map_err(Base44Error::from_js)?;

    let client = js::call_sync(&sdk, "createClient", &[js::to_js(&options)?])?;
    Reflect::set(&window, &JsValue::from_str(GLOBAL_CLIENT), &client).map_err(Base44Error::from_js)?;
    log::info!("[BASE44] client ready for app {}", options.app_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_use_sdk_field_names() {
        let options = client_options(" 64f0c0ffee ").unwrap();
        assert_eq!(
            serde_json::to_value(options).unwrap(),
            serde_json::json!({ "appId": "64f0c0ffee" })
        );
    }

    #[test]
    fn blank_app_id_is_rejected() {
        assert_eq!(client_options(""), Err(Base44Error::MissingAppId));
        assert_eq!(client_options("   "), Err(Base44Error::MissingAppId));
    }
}
