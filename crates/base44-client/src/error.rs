//! SDK Error Type

use js_sys::Reflect;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure of a Base44 SDK call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Base44Error {
    #[error("no browser window available")]
    NoWindow,

    #[error("Base44 client is not initialized (window.base44 is missing)")]
    NotInitialized,

    #[error("no Base44 app id configured")]
    MissingAppId,

    #[error("Base44 client has no member `{0}`")]
    MissingMember(String),

    #[error("not authenticated")]
    Unauthorized,

    #[error("request failed: {message}")]
    Request {
        status: Option<u16>,
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl Base44Error {
    /// Classify an HTTP-ish failure by status code
    pub fn from_parts(status: Option<u16>, message: impl Into<String>) -> Self {
        match status {
            Some(401) | Some(403) => Self::Unauthorized,
            _ => Self::Request {
                status,
                message: message.into(),
            },
        }
    }

    /// Convert a rejected promise / thrown value into a typed error.
    ///
    /// The SDK rejects with axios-like errors: `{ message, status }` or
    /// `{ message, response: { status } }`. Plain strings are taken as the message.
    pub fn from_js(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| get(&value, "message").and_then(|m| m.as_string()))
            .or_else(|| {
                js_sys::JSON::stringify(&value)
                    .ok()
                    .and_then(|s| s.as_string())
            })
            .unwrap_or_else(|| "unknown error".to_string());

        let status = get(&value, "status")
            .and_then(|s| s.as_f64())
            .or_else(|| {
                get(&value, "response")
                    .and_then(|r| get(&r, "status"))
                    .and_then(|s| s.as_f64())
            })
            .and_then(status_code);

        Self::from_parts(status, message)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Whole numbers in the HTTP status range; anything else is no status
fn status_code(raw: f64) -> Option<u16> {
    if raw.fract() != 0.0 || !(100.0..=599.0).contains(&raw) {
        return None;
    }
    u16::try_from(raw as i64).ok()
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    if !target.is_object() {
        return None;
    }
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

impl From<serde_wasm_bindgen::Error> for Base44Error {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Base44Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_map_to_unauthorized() {
        assert_eq!(Base44Error::from_parts(Some(401), "nope"), Base44Error::Unauthorized);
        assert_eq!(Base44Error::from_parts(Some(403), "nope"), Base44Error::Unauthorized);
        assert!(Base44Error::from_parts(Some(401), "").is_unauthorized());
    }

    #[test]
    fn other_statuses_keep_message() {
        let err = Base44Error::from_parts(Some(500), "boom");
        assert_eq!(
            err,
            Base44Error::Request {
                status: Some(500),
                message: "boom".to_string()
            }
        );
        assert_eq!(err.to_string(), "request failed: boom");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn status_code_rejects_out_of_range_values() {
        assert_eq!(status_code(404.0), Some(404));
        assert_eq!(status_code(401.0), Some(401));
        assert_eq!(status_code(70_000.0), None);
        assert_eq!(status_code(65_937.0), None);
        assert_eq!(status_code(-1.0), None);
        assert_eq!(status_code(0.0), None);
        assert_eq!(status_code(f64::NAN), None);
        assert_eq!(status_code(f64::INFINITY), None);
        assert_eq!(status_code(404.5), None);
    }

    #[test]
    fn missing_status_is_a_plain_request_error() {
        let err = Base44Error::from_parts(None, "network down");
        assert!(matches!(err, Base44Error::Request { status: None, .. }));
    }
}
