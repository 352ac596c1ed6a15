//! JS Bridge
//!
//! Dynamic method calls on the SDK object graph.

use js_sys::{Array, Function, Promise, Reflect};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::{Base44Error, Result};

/// Global under which the host page exposes the SDK client
pub(crate) const GLOBAL_CLIENT: &str = "base44";

/// Whether `target[key]` holds something other than `undefined`/`null`
pub(crate) fn is_set(target: &JsValue, key: &str) -> Result<bool> {
    let value = Reflect::get(target, &JsValue::from_str(key)).map_err(Base44Error::from_js)?;
    Ok(!value.is_undefined() && !value.is_null())
}

fn client() -> Result<JsValue> {
    let window = web_sys::window().ok_or(Base44Error::NoWindow)?;
    let client = Reflect::get(&window, &JsValue::from_str(GLOBAL_CLIENT)).map_err(Base44Error::from_js)?;
    if client.is_undefined() || client.is_null() {
        return Err(Base44Error::NotInitialized);
    }
    Ok(client)
}

/// Resolve `window.base44.<path...>`
pub(crate) fn namespace(path: &[&str]) -> Result<JsValue> {
    let mut target = client()?;
    for key in path {
        let next = Reflect::get(&target, &JsValue::from_str(key)).map_err(Base44Error::from_js)?;
        if next.is_undefined() || next.is_null() {
            return Err(Base44Error::MissingMember(path.join(".")));
        }
        target = next;
    }
    Ok(target)
}

fn method(target: &JsValue, name: &str) -> Result<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .map_err(Base44Error::from_js)?
        .dyn_into::<Function>()
        .map_err(|_| Base44Error::MissingMember(name.to_string()))
}

/// Call a method synchronously, returning its raw result
pub(crate) fn call_sync(target: &JsValue, name: &str, args: &[JsValue]) -> Result<JsValue> {
    let func = method(target, name)?;
    let args: Array = args.iter().collect();
    func.apply(target, &args).map_err(Base44Error::from_js)
}

/// Call a method and await its result (non-promise results resolve immediately)
pub(crate) async fn call(target: &JsValue, name: &str, args: &[JsValue]) -> Result<JsValue> {
    let returned = call_sync(target, name, args)?;
    JsFuture::from(Promise::resolve(&returned))
        .await
        .map_err(Base44Error::from_js)
}

/// Serialize with plain JS objects for maps (the SDK posts these as JSON)
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(Into::into)
}

pub(crate) fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T> {
    serde_wasm_bindgen::from_value(value).map_err(Into::into)
}

/// `Some(v)` as a JS string, `None` as `undefined`
pub(crate) fn opt_str(value: Option<&str>) -> JsValue {
    value.map(JsValue::from_str).unwrap_or(JsValue::UNDEFINED)
}
