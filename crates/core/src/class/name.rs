//! Validated class names

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::tokens::is_token;
use crate::error::{ClassAttrError, Result};

/// A class name that is guaranteed to be a single token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClassName(String);

impl ClassName {
    /// Validate `name` as a class name
    pub fn parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if is_token(&name) {
            Ok(Self(name))
        } else {
            Err(ClassAttrError::invalid_class_name(name))
        }
    }

    /// Wrap a known-good literal
    pub(crate) fn from_static(name: &'static str) -> Self {
        debug_assert!(is_token(name));
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClassName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ClassName {
    type Err = ClassAttrError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClassName {
    type Error = ClassAttrError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<ClassName> for String {
    fn from(name: ClassName) -> Self {
        name.0
    }
}
