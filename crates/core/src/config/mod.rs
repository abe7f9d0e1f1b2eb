//! Editor configuration

pub mod constants;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::class::{ClassEditor, ClassName, EditMode};
use crate::error::Result;
use crate::util::{HoverHandlers, hover_handlers};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Strategy used for add/remove/toggle
    pub mode: EditMode,
    /// Class applied by highlight handlers
    pub highlight_class: ClassName,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            mode: EditMode::default(),
            highlight_class: ClassName::from_static(constants::DEFAULT_HIGHLIGHT_CLASS),
        }
    }
}

impl EditorConfig {
    pub fn with_mode(mut self, mode: EditMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn editor(&self) -> &'static dyn ClassEditor {
        self.mode.editor()
    }

    /// Handlers that apply [`EditorConfig::highlight_class`] to `target_id`
    pub fn hover_handlers(&self, target_id: &str) -> HoverHandlers {
        hover_handlers(target_id, self.highlight_class.as_str())
    }

    /// Parse a JSON config document
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load `path` if given, else [`constants::CONFIG_FILE`] when it exists,
    /// else the defaults
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(constants::CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
