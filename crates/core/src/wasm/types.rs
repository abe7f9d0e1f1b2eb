// JavaScript-friendly types for WASM bindings

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::class::EditMode;

/// Result of a toggle, as seen from JavaScript
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JsToggleOutput {
    pub text: String,
    pub present: bool,
}

/// Map an optional JS mode string to an [`EditMode`]
pub fn parse_mode(mode: Option<String>) -> Result<EditMode, JsValue> {
    match mode {
        None => Ok(EditMode::default()),
        Some(mode) => mode
            .parse::<EditMode>()
            .map_err(|e| JsValue::from_str(&format!("Failed to parse mode: {}", e))),
    }
}
