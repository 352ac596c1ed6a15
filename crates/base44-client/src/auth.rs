//! Auth Bindings
//!
//! `base44.auth.*`: session checks, current user, login redirect.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::js::{call, call_sync, from_js, namespace, opt_str, to_js};
use crate::Result;

fn auth() -> Result<JsValue> {
    namespace(&["auth"])
}

/// Whether the SDK holds a valid session token
pub async fn is_authenticated() -> Result<bool> {
    let result = call(&auth()?, "isAuthenticated", &[]).await?;
    Ok(result.as_bool().unwrap_or(false))
}

/// Fetch the current user record
pub async fn me<T: DeserializeOwned>() -> Result<T> {
    let result = call(&auth()?, "me", &[]).await?;
    from_js(result)
}

/// Patch the current user record, returning the updated user
pub async fn update_me<D, T>(data: &D) -> Result<T>
where
    D: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let result = call(&auth()?, "updateMe", &[to_js(data)?]).await?;
    from_js(result)
}

/// Navigate the browser to the hosted login page.
///
/// `next_url` is where the login flow returns to; `None` lets the SDK use the
/// current location.
pub fn redirect_to_login(next_url: Option<&str>) -> Result<()> {
    log::info!("[BASE44] redirecting to login (next={:?})", next_url);
    call_sync(&auth()?, "redirectToLogin", &[opt_str(next_url)])?;
    Ok(())
}

/// Clear the session and optionally redirect
pub fn logout(redirect_url: Option<&str>) -> Result<()> {
    log::info!("[BASE44] logout");
    call_sync(&auth()?, "logout", &[opt_str(redirect_url)])?;
    Ok(())
}
