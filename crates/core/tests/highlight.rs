// Unit tests for highlight handler scripts
use classattr_core::util::{CLASS_HELPERS_JS, hover_handlers};

#[test]
fn test_hover_handlers() {
    let handlers = hover_handlers("L7", "hover");
    assert_eq!(
        handlers.on_mouse_over,
        "addClass(document.getElementById('L7'), 'hover')"
    );
    assert_eq!(
        handlers.on_mouse_out,
        "removeClass(document.getElementById('L7'), 'hover')"
    );
}

#[test]
fn test_hover_handlers_escape_js_strings() {
    let handlers = hover_handlers("it's", r"a\b");
    assert_eq!(
        handlers.on_mouse_over,
        r"addClass(document.getElementById('it\'s'), 'a\\b')"
    );
}

#[test]
fn test_helpers_define_called_functions() {
    for name in ["hasClass", "addClass", "removeClass"] {
        assert!(
            CLASS_HELPERS_JS.contains(&format!("function {name}(element, cls)")),
            "{name}"
        );
    }
}
