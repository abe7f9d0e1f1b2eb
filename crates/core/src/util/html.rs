/// HTML escaping utilities
pub struct HtmlEscape;

impl HtmlEscape {
    /// Escape HTML content (for text content inside tags)
    /// Escapes: &, <, >
    pub fn escape_content(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    /// Escape HTML attribute values
    /// Escapes: &, <, >, ", '
    pub fn escape_attribute(text: &str) -> String {
        Self::escape_content(text)
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }
}
