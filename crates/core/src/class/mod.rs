//! Class attribute editing
//!
//! The attribute text is treated as whitespace-separated tokens. Every
//! operation is a pure function of the text and a class name; writing the
//! result back to an element is the caller's job (see [`crate::element`]).

pub mod editor;
pub mod name;
pub mod tokens;

pub use editor::{ClassEditor, EditMode, SpacingPreserving, Tokenized};
pub use name::ClassName;
pub use tokens::{is_token, join, normalize, tokens};
