// Unit tests for the API facade
use classattr_core::EditMode;
use classattr_core::api::{self, Edit, Op};

#[test]
fn test_concrete_cases() {
    assert!(api::has("foo bar", "foo"));
    assert!(!api::has("foobar", "foo"));
    assert_eq!(api::add("foo", "bar"), "foo bar");
    assert_eq!(api::add("foo ", "bar"), "foo bar");
    assert_eq!(api::add("foo bar", "bar"), "foo bar");
    assert_eq!(api::tokens(&api::remove("foo bar baz", "bar")), vec!["foo", "baz"]);
    assert_eq!(api::remove("foo", "bar"), "foo");
}

#[test]
fn test_tokens_and_normalize() {
    assert_eq!(api::tokens(" a\tb  c "), vec!["a", "b", "c"]);
    assert!(api::tokens("   ").is_empty());
    assert_eq!(api::normalize(" a\tb  c "), "a b c");
}

#[test]
fn test_toggle() {
    assert_eq!(api::toggle("", "x"), ("x".to_string(), true));
    assert_eq!(api::toggle("x", "x"), (String::new(), false));
}

#[test]
fn test_edit_reports_changes() {
    assert_eq!(
        api::edit("foo", "bar", Op::Add, EditMode::Normalize),
        Edit {
            text: "foo bar".to_string(),
            changed: true,
            present: true,
        }
    );
    assert_eq!(
        api::edit("foo bar", "foo", Op::Has, EditMode::Preserve),
        Edit {
            text: "foo bar".to_string(),
            changed: false,
            present: true,
        }
    );
    assert_eq!(
        api::edit("foo bar", "bar", Op::Remove, EditMode::Preserve),
        Edit {
            text: "foo ".to_string(),
            changed: true,
            present: false,
        }
    );
    assert_eq!(
        api::edit("foo", "bar", Op::Remove, EditMode::Normalize),
        Edit {
            text: "foo".to_string(),
            changed: false,
            present: false,
        }
    );
    assert_eq!(
        api::edit("foo", "foo", Op::Toggle, EditMode::Normalize),
        Edit {
            text: String::new(),
            changed: true,
            present: false,
        }
    );
}

#[test]
fn test_op_parse() {
    assert_eq!("toggle".parse::<Op>().unwrap(), Op::Toggle);
    assert_eq!(Op::Remove.to_string(), "remove");
    assert!("replace".parse::<Op>().is_err());
}
