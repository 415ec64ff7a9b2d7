//! Shared helpers for WASM API operations
//!
//! Serialization, deserialization and error conversion. Failures are logged
//! through the `log` facade (routed to the browser console by `console_log`)
//! before being handed back to JavaScript.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| validation_error(format!("{}: {}", error_context, e)))
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| validation_error(format!("{}: {}", error_context, e)))
}

/// Deserialize an optional argument; `undefined` and `null` give the default
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    deserialize(value, error_context)
}

/// Convert a validation error to a JsValue
pub fn validation_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log::error!("[WASM] {}", msg);
    JsValue::from_str(&msg)
}
