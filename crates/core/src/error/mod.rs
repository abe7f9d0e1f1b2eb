/// Centralized error handling for classattr
pub mod classattr;

pub use classattr::{ClassAttrError, Result};
