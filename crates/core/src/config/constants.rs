//! Constants for classattr

/// Default config file name looked up in the working directory
pub const CONFIG_FILE: &str = "classattr.json";

/// Class added to a highlight target while the pointer hovers its note
pub const DEFAULT_HIGHLIGHT_CLASS: &str = "hover";

/// Attribute holding an element's classes
pub const CLASS_ATTRIBUTE: &str = "class";
