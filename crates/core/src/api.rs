// Stable API facade for external consumers - Pure logic, no I/O

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::class::{ClassEditor, EditMode, Tokenized};
use crate::error::ClassAttrError;

/// Whether `class_name` appears as a whole token in `text`
pub fn has(text: &str, class_name: &str) -> bool {
    Tokenized.has(text, class_name)
}

/// Append `class_name` unless present; unchanged text is returned verbatim
pub fn add(text: &str, class_name: &str) -> String {
    Tokenized.add(text, class_name)
}

/// Remove the first occurrence of `class_name`
pub fn remove(text: &str, class_name: &str) -> String {
    Tokenized.remove(text, class_name)
}

/// Flip `class_name`; the bool reports presence afterwards
pub fn toggle(text: &str, class_name: &str) -> (String, bool) {
    Tokenized.toggle(text, class_name)
}

/// Tokens of the attribute text, in order
pub fn tokens(text: &str) -> Vec<String> {
    crate::class::tokens(text).map(str::to_string).collect()
}

/// Attribute text with single-space separators and no padding
pub fn normalize(text: &str) -> String {
    crate::class::normalize(text)
}

/// Editing operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    Has,
    Add,
    Remove,
    Toggle,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::Has => "has",
            Op::Add => "add",
            Op::Remove => "remove",
            Op::Toggle => "toggle",
        };
        f.write_str(name)
    }
}

impl FromStr for Op {
    type Err = ClassAttrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "has" => Ok(Op::Has),
            "add" => Ok(Op::Add),
            "remove" => Ok(Op::Remove),
            "toggle" => Ok(Op::Toggle),
            other => Err(ClassAttrError::other(format!("Unknown operation: {other}"))),
        }
    }
}

/// Outcome of [`edit`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    /// Attribute text after the operation
    pub text: String,
    /// Whether `text` differs from the input
    pub changed: bool,
    /// Whether the class is present in `text`
    pub present: bool,
}

/// Run `op` on `text` with the editor selected by `mode`
pub fn edit(text: &str, class_name: &str, op: Op, mode: EditMode) -> Edit {
    let editor = mode.editor();
    let updated = match op {
        Op::Has => text.to_string(),
        Op::Add => editor.add(text, class_name),
        Op::Remove => editor.remove(text, class_name),
        Op::Toggle => editor.toggle(text, class_name).0,
    };
    let present = editor.has(&updated, class_name);

    Edit {
        changed: updated != text,
        text: updated,
        present,
    }
}
