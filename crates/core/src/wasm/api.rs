// WASM API bindings - JavaScript-callable functions
//
// The caller reads `element.className`, passes it in, and assigns the
// returned text back.

use super::types::{JsToggleOutput, parse_mode};
use wasm_bindgen::prelude::*;

/// Whether `class_name` appears as a whole token in `text`
///
/// # Errors
/// Returns a JsValue error if `mode` is not "normalize" or "preserve"
#[wasm_bindgen(js_name = hasClass)]
pub fn has_class(text: &str, class_name: &str, mode: Option<String>) -> Result<bool, JsValue> {
    Ok(parse_mode(mode)?.editor().has(text, class_name))
}

/// Add `class_name` to `text` unless already present
#[wasm_bindgen(js_name = addClass)]
pub fn add_class(text: &str, class_name: &str, mode: Option<String>) -> Result<String, JsValue> {
    Ok(parse_mode(mode)?.editor().add(text, class_name))
}

/// Remove the first occurrence of `class_name` from `text`
#[wasm_bindgen(js_name = removeClass)]
pub fn remove_class(
    text: &str,
    class_name: &str,
    mode: Option<String>,
) -> Result<String, JsValue> {
    Ok(parse_mode(mode)?.editor().remove(text, class_name))
}

/// Toggle `class_name`
///
/// # Returns
/// * `JsValue` - `{ text, present }`
#[wasm_bindgen(js_name = toggleClass)]
pub fn toggle_class(
    text: &str,
    class_name: &str,
    mode: Option<String>,
) -> Result<JsValue, JsValue> {
    let (text, present) = parse_mode(mode)?.editor().toggle(text, class_name);

    serde_wasm_bindgen::to_value(&JsToggleOutput { text, present })
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize output: {}", e)))
}

/// Tokens of the attribute text
#[wasm_bindgen(js_name = classTokens)]
pub fn class_tokens(text: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&crate::api::tokens(text))
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize output: {}", e)))
}
