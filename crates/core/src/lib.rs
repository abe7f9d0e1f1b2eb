//! Class attribute editing for DOM-like elements
//!
//! ```
//! use classattr_core::api;
//!
//! let text = api::add("card", "active");
//! assert_eq!(text, "card active");
//! assert!(api::has(&text, "active"));
//! assert_eq!(api::remove(&text, "card"), "active");
//! ```

pub mod api;
pub mod class;
pub mod config;
pub mod element;
pub mod error;
pub mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use class::{ClassEditor, ClassName, EditMode, SpacingPreserving, Tokenized};
pub use config::EditorConfig;
pub use element::{ClassHost, Element, add_class, has_class, remove_class, toggle_class};
pub use error::{ClassAttrError, Result};
