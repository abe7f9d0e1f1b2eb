//! Class attribute editors
//!
//! Two strategies share the [`ClassEditor`] interface:
//!
//! - [`Tokenized`] splits the text into tokens, compares them literally and
//!   rejoins with single spaces whenever it has to rewrite the text.
//! - [`SpacingPreserving`] keeps the surrounding whitespace untouched and
//!   only edits around the matched token. Class names are escaped before
//!   they reach the pattern, so `a.b` only matches `a.b`.
//!
//! Neither strategy fails: an unusable class name never matches, and
//! `add`/`remove` hand the text back unchanged for it.

use std::fmt;
use std::iter;
use std::str::FromStr;

use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::tokens::{is_token, join, tokens};
use crate::error::ClassAttrError;

/// Editing interface over class attribute text
pub trait ClassEditor: Send + Sync {
    /// Whether `class_name` appears as a whole token in `text`
    fn has(&self, text: &str, class_name: &str) -> bool;

    /// Append `class_name` unless already present
    fn add(&self, text: &str, class_name: &str) -> String;

    /// Remove the first occurrence of `class_name`, if any
    fn remove(&self, text: &str, class_name: &str) -> String;

    /// Remove `class_name` when present, add it otherwise.
    ///
    /// Returns the new text and whether the class is present in it.
    fn toggle(&self, text: &str, class_name: &str) -> (String, bool) {
        let updated = if self.has(text, class_name) {
            self.remove(text, class_name)
        } else {
            self.add(text, class_name)
        };
        let present = self.has(&updated, class_name);
        (updated, present)
    }
}

/// Token based editor; rewrites produce normalized text
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenized;

impl ClassEditor for Tokenized {
    fn has(&self, text: &str, class_name: &str) -> bool {
        is_token(class_name) && tokens(text).any(|token| token == class_name)
    }

    fn add(&self, text: &str, class_name: &str) -> String {
        if !accept(class_name) || self.has(text, class_name) {
            return text.to_string();
        }

        debug!("Adding class {:?} to {:?}", class_name, text);
        join(tokens(text).chain(iter::once(class_name)))
    }

    fn remove(&self, text: &str, class_name: &str) -> String {
        if !accept(class_name) || !self.has(text, class_name) {
            return text.to_string();
        }

        debug!("Removing class {:?} from {:?}", class_name, text);
        let mut removed = false;
        join(tokens(text).filter(|token| {
            if !removed && *token == class_name {
                removed = true;
                false
            } else {
                true
            }
        }))
    }
}

/// Boundary-pattern editor that leaves unrelated whitespace as it was
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacingPreserving;

impl SpacingPreserving {
    /// `(\s|^)name(\s|$)` with `name` escaped
    fn boundary(class_name: &str) -> Option<Regex> {
        let pattern = format!(r"(\s|^){}(\s|$)", regex::escape(class_name));
        match Regex::new(&pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!("Cannot build pattern for class {:?}: {}", class_name, e);
                None
            }
        }
    }
}

impl ClassEditor for SpacingPreserving {
    fn has(&self, text: &str, class_name: &str) -> bool {
        is_token(class_name)
            && Self::boundary(class_name).is_some_and(|re| re.is_match(text))
    }

    fn add(&self, text: &str, class_name: &str) -> String {
        if !accept(class_name) || self.has(text, class_name) {
            return text.to_string();
        }

        debug!("Adding class {:?} to {:?}", class_name, text);
        if text.ends_with(' ') {
            format!("{text}{class_name}")
        } else {
            format!("{text} {class_name}")
        }
    }

    fn remove(&self, text: &str, class_name: &str) -> String {
        if !accept(class_name) {
            return text.to_string();
        }
        let Some(re) = Self::boundary(class_name) else {
            return text.to_string();
        };
        if !re.is_match(text) {
            return text.to_string();
        }

        debug!("Removing class {:?} from {:?}", class_name, text);
        re.replace(text, NoExpand(" ")).into_owned()
    }
}

fn accept(class_name: &str) -> bool {
    if is_token(class_name) {
        true
    } else {
        warn!("Ignoring invalid class name {:?}", class_name);
        false
    }
}

/// Which editor to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    /// [`Tokenized`]
    #[default]
    Normalize,
    /// [`SpacingPreserving`]
    Preserve,
}

impl EditMode {
    pub fn editor(self) -> &'static dyn ClassEditor {
        match self {
            EditMode::Normalize => &Tokenized,
            EditMode::Preserve => &SpacingPreserving,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EditMode::Normalize => "normalize",
            EditMode::Preserve => "preserve",
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditMode {
    type Err = ClassAttrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normalize" => Ok(EditMode::Normalize),
            "preserve" => Ok(EditMode::Preserve),
            other => Err(ClassAttrError::invalid_mode(other)),
        }
    }
}
