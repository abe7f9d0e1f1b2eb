// Unit tests for the token based class editor
use classattr_core::class::{ClassEditor, Tokenized, tokens};
use tracing_subscriber::EnvFilter;

const SAMPLES: &[&str] = &["", "foo", "foo ", "  foo   bar ", "a b a", "x\ty\nz"];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_test_writer()
        .try_init();
}

fn token_vec(text: &str) -> Vec<&str> {
    tokens(text).collect()
}

#[test]
fn test_has_matches_whole_tokens() {
    assert!(Tokenized.has("foo bar", "foo"));
    assert!(Tokenized.has("foo bar", "bar"));
    assert!(!Tokenized.has("foobar", "foo"));
    assert!(!Tokenized.has("", "foo"));
    assert!(Tokenized.has("\tfoo\n", "foo"));
}

#[test]
fn test_has_rejects_unusable_class_names() {
    assert!(!Tokenized.has("foo bar", ""));
    assert!(!Tokenized.has("foo bar", "foo bar"));
}

#[test]
fn test_add_appends_with_single_space() {
    assert_eq!(Tokenized.add("foo", "bar"), "foo bar");
    assert_eq!(Tokenized.add("foo ", "bar"), "foo bar");
    assert_eq!(Tokenized.add("", "bar"), "bar");
    assert_eq!(Tokenized.add("  a   b ", "c"), "a b c");
}

#[test]
fn test_add_existing_class_returns_text_verbatim() {
    assert_eq!(Tokenized.add("foo bar", "bar"), "foo bar");
    assert_eq!(Tokenized.add("  a  b ", "a"), "  a  b ");
}

#[test]
fn test_add_ignores_invalid_class_name() {
    init_tracing();
    assert_eq!(Tokenized.add("foo", "two words"), "foo");
    assert_eq!(Tokenized.add("foo", ""), "foo");
}

#[test]
fn test_remove_ignores_invalid_class_name() {
    init_tracing();
    assert_eq!(Tokenized.remove("foo bar", "foo bar"), "foo bar");
}

#[test]
fn test_remove_first_occurrence() {
    assert_eq!(Tokenized.remove("foo bar baz", "bar"), "foo baz");
    assert_eq!(Tokenized.remove("foo", "foo"), "");
    assert_eq!(Tokenized.remove("a b a", "a"), "b a");
    assert_eq!(Tokenized.remove(" a  b ", "b"), "a");
}

#[test]
fn test_remove_absent_class_returns_text_verbatim() {
    assert_eq!(Tokenized.remove("foo", "bar"), "foo");
    assert_eq!(Tokenized.remove("  foo  ", "bar"), "  foo  ");
    assert_eq!(Tokenized.remove("", "bar"), "");
}

#[test]
fn test_metacharacters_are_literal() {
    assert!(Tokenized.has("c++ x", "c++"));
    assert!(!Tokenized.has("axb", "a.b"));
    assert!(!Tokenized.has("aaab", "a*b"));
    assert_eq!(Tokenized.add("axb", "a.b"), "axb a.b");
    assert_eq!(Tokenized.remove("axb a.b", "a.b"), "axb");
}

#[test]
fn test_toggle() {
    assert_eq!(Tokenized.toggle("foo", "bar"), ("foo bar".to_string(), true));
    assert_eq!(Tokenized.toggle("foo bar", "bar"), ("foo".to_string(), false));
    // Only one occurrence goes per call
    assert_eq!(Tokenized.toggle("a a", "a"), ("a".to_string(), true));
}

#[test]
fn test_add_then_has() {
    for text in SAMPLES {
        let added = Tokenized.add(text, "new");
        assert!(Tokenized.has(&added, "new"), "{text:?}");
    }
}

#[test]
fn test_add_is_idempotent() {
    for text in SAMPLES {
        let once = Tokenized.add(text, "foo");
        assert_eq!(Tokenized.add(&once, "foo"), once, "{text:?}");
    }
}

#[test]
fn test_add_keeps_other_tokens_in_order() {
    for text in SAMPLES {
        let mut expected = token_vec(text);
        expected.push("new");
        assert_eq!(token_vec(&Tokenized.add(text, "new")), expected);
    }
}

#[test]
fn test_remove_single_occurrence_makes_class_absent() {
    for text in ["foo", "foo bar", " bar foo ", "x\tfoo\ny"] {
        assert!(!Tokenized.has(&Tokenized.remove(text, "foo"), "foo"), "{text:?}");
    }
}

#[test]
fn test_toggle_twice_restores_presence() {
    for text in SAMPLES {
        let (once, _) = Tokenized.toggle(text, "foo");
        let (_, present) = Tokenized.toggle(&once, "foo");
        assert_eq!(present, Tokenized.has(text, "foo"), "{text:?}");
    }
}
