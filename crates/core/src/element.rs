//! Elements carrying a class attribute
//!
//! The editors in [`crate::class`] only compute new attribute text. The
//! helpers here run the whole transaction against a [`ClassHost`]: read the
//! attribute, compute, and write back when something changed.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::class::{ClassEditor, EditMode, Tokenized};
use crate::config::EditorConfig;
use crate::config::constants::CLASS_ATTRIBUTE;
use crate::util::{HoverHandlers, HtmlEscape, hover_handlers};

/// Anything exposing a readable/writable class attribute
pub trait ClassHost {
    /// Current attribute text, `None` when the attribute is absent
    fn class_attr(&self) -> Option<&str>;

    fn set_class_attr(&mut self, text: String);
}

/// Whether the host's class attribute contains `class_name`
pub fn has_class<H: ClassHost + ?Sized>(host: &H, class_name: &str, mode: EditMode) -> bool {
    mode.editor().has(host.class_attr().unwrap_or_default(), class_name)
}

/// Add `class_name` to the host. Returns whether the attribute changed.
pub fn add_class<H: ClassHost + ?Sized>(host: &mut H, class_name: &str, mode: EditMode) -> bool {
    let current = host.class_attr().unwrap_or_default();
    let updated = mode.editor().add(current, class_name);
    commit(host, updated)
}

/// Remove the first occurrence of `class_name` from the host. Returns
/// whether the attribute changed.
pub fn remove_class<H: ClassHost + ?Sized>(
    host: &mut H,
    class_name: &str,
    mode: EditMode,
) -> bool {
    let current = host.class_attr().unwrap_or_default();
    let updated = mode.editor().remove(current, class_name);
    commit(host, updated)
}

/// Toggle `class_name` on the host. Returns whether it is present afterwards.
pub fn toggle_class<H: ClassHost + ?Sized>(
    host: &mut H,
    class_name: &str,
    mode: EditMode,
) -> bool {
    let current = host.class_attr().unwrap_or_default();
    let (updated, present) = mode.editor().toggle(current, class_name);
    commit(host, updated);
    present
}

fn commit<H: ClassHost + ?Sized>(host: &mut H, updated: String) -> bool {
    if host.class_attr().unwrap_or_default() == updated {
        return false;
    }
    debug!("Class attribute updated to {:?}", updated);
    host.set_class_attr(updated);
    true
}

/// A single element with ordered attributes and optional text content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    pub text: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            text: None,
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_attr("id", id)
    }

    /// Add a class using the token based editor
    pub fn with_class(mut self, class_name: &str) -> Self {
        let current = self.class_attr().unwrap_or_default();
        let updated = Tokenized.add(current, class_name);
        self.set_class_attr(updated);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Highlight the element with id `target_id` by adding `class_name` to
    /// it while the pointer is over this element
    pub fn with_highlight(self, target_id: &str, class_name: &str) -> Self {
        self.with_handlers(hover_handlers(target_id, class_name))
    }

    /// [`Element::with_highlight`] using the configured highlight class
    pub fn with_config_highlight(self, target_id: &str, config: &EditorConfig) -> Self {
        self.with_handlers(config.hover_handlers(target_id))
    }

    fn with_handlers(self, handlers: HoverHandlers) -> Self {
        self.with_attr("onmouseover", handlers.on_mouse_over)
            .with_attr("onmouseout", handlers.on_mouse_out)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attributes.shift_remove(name)
    }

    /// Render as HTML; attribute values and text are escaped
    pub fn to_html(&self) -> String {
        let mut html = format!("<{}", self.tag);
        for (name, value) in &self.attributes {
            html.push_str(&format!(
                " {}=\"{}\"",
                name,
                HtmlEscape::escape_attribute(value)
            ));
        }
        html.push('>');
        if let Some(text) = &self.text {
            html.push_str(&HtmlEscape::escape_content(text));
        }
        html.push_str(&format!("</{}>", self.tag));
        html
    }
}

impl ClassHost for Element {
    fn class_attr(&self) -> Option<&str> {
        self.attr(CLASS_ATTRIBUTE)
    }

    /// Blank text drops the attribute
    fn set_class_attr(&mut self, text: String) {
        if text.trim().is_empty() {
            self.remove_attr(CLASS_ATTRIBUTE);
        } else {
            self.set_attr(CLASS_ATTRIBUTE, text);
        }
    }
}
