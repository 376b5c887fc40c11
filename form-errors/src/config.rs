//! Widget configuration.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::templates::ErrorTemplateTable;

/// Configuration handed to [`crate::ErrorMessageResolver::new`].
///
/// When `templates` is set it replaces the locale-selected table
/// wholesale. Tables are never merged.
///
/// ```json
/// { "templates": { "required": "Please fill in this field" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WidgetConfig {
    #[serde(default)]
    pub templates: Option<ErrorTemplateTable>,
}

impl WidgetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the built-in tables with `templates`.
    pub fn with_templates(mut self, templates: ErrorTemplateTable) -> Self {
        self.templates = Some(templates);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("[config] loaded widget config from {}", path.display());
        Self::from_json(&json)
    }
}
