//! Inline scripts that highlight an element by toggling one of its classes

/// Browser-side class helpers used by the generated handlers.
///
/// Token based, matching [`crate::class::Tokenized`]: the class name is
/// compared literally and rewrites join tokens with single spaces.
pub const CLASS_HELPERS_JS: &str = r#"function classTokens(element) {
    return element.className.split(/\s+/).filter(function (token) {
        return token.length > 0;
    });
}
function hasClass(element, cls) {
    return classTokens(element).indexOf(cls) !== -1;
}
function addClass(element, cls) {
    if (!hasClass(element, cls)) {
        element.className = classTokens(element).concat([cls]).join(' ');
    }
}
function removeClass(element, cls) {
    var tokens = classTokens(element);
    var index = tokens.indexOf(cls);
    if (index !== -1) {
        tokens.splice(index, 1);
        element.className = tokens.join(' ');
    }
}
"#;

/// Handler scripts for `onmouseover` / `onmouseout`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverHandlers {
    pub on_mouse_over: String,
    pub on_mouse_out: String,
}

/// Build handlers that add `class_name` to the element with id `target_id`
/// while the pointer is over the annotated element.
pub fn hover_handlers(target_id: &str, class_name: &str) -> HoverHandlers {
    let target = format!("document.getElementById({})", js_string(target_id));
    let class_name = js_string(class_name);

    HoverHandlers {
        on_mouse_over: format!("addClass({target}, {class_name})"),
        on_mouse_out: format!("removeClass({target}, {class_name})"),
    }
}

/// `<script>` block defining [`CLASS_HELPERS_JS`]
pub fn helpers_script_tag() -> String {
    format!("<script>\n{CLASS_HELPERS_JS}</script>\n")
}

/// Single-quoted JS string literal
fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
