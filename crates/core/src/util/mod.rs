pub mod html;
pub mod script;

pub use html::HtmlEscape;
pub use script::{CLASS_HELPERS_JS, HoverHandlers, helpers_script_tag, hover_handlers};
