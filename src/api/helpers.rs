//! Shared helpers for WASM API operations
//!
//! Serialization at the JS boundary and conversion of failures into logged
//! `JsValue` errors.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| js_error(format!("{}: {}", error_context, e)))
}

/// Deserialize an optional argument; `undefined` and `null` give `None`
pub fn deserialize_optional<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<Option<T>, JsValue> {
    if value.is_undefined() || value.is_null() {
        Ok(None)
    } else {
        deserialize(value, error_context).map(Some)
    }
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| js_error(format!("{}: {}", error_context, e)))
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Log `msg` and wrap it as a JS error value
pub fn js_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}

/// Validate the number of Bézier control points
pub fn validate_point_count(count: usize) -> Result<(), String> {
    if !(3..=4).contains(&count) {
        return Err(format!(
            "Invalid control point count: {} (must be 3 or 4)",
            count
        ));
    }
    Ok(())
}
