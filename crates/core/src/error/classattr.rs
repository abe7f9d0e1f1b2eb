/// Unified error type for classattr
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassAttrError {
    // Input errors
    #[error("Invalid class name: {0:?}")]
    InvalidClassName(String),

    #[error("Invalid edit mode: {0}")]
    InvalidMode(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    // Generic error for compatibility
    #[error("{0}")]
    Other(String),
}

/// Result type alias using ClassAttrError
pub type Result<T> = std::result::Result<T, ClassAttrError>;

impl ClassAttrError {
    /// Create an invalid class name error
    pub fn invalid_class_name(name: impl Into<String>) -> Self {
        Self::InvalidClassName(name.into())
    }

    /// Create an invalid mode error
    pub fn invalid_mode(mode: impl Into<String>) -> Self {
        Self::InvalidMode(mode.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

impl From<String> for ClassAttrError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}

impl From<&str> for ClassAttrError {
    fn from(msg: &str) -> Self {
        Self::Other(msg.to_string())
    }
}

impl From<serde_json::Error> for ClassAttrError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(err.to_string())
    }
}
