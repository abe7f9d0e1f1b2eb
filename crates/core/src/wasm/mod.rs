// WASM bindings module - only compiled when wasm feature is enabled

pub mod api;
pub mod types;

pub use api::{add_class, class_tokens, has_class, remove_class, toggle_class};

use wasm_bindgen::prelude::*;

/// Install the panic hook so panics show up in the browser console
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
