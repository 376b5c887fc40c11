//! Error types

use std::path::PathBuf;

use formdom::TreeError;
use thiserror::Error;

/// Errors surfaced by an [`crate::ErrorWidget`] while attaching or rendering.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// The widget is not nested inside the element it requires.
    #[error(transparent)]
    AncestorNotFound(#[from] TreeError),

    /// The observed field does not exist on the host form.
    #[error("Field '{field}' not found in form")]
    FieldNotFound { field: String },

    /// The widget markup has no `input-field` attribute.
    #[error("Element '{element}' has no input-field attribute")]
    MissingInputField { element: String },
}

impl WidgetError {
    pub fn field_not_found(field: impl Into<String>) -> Self {
        Self::FieldNotFound {
            field: field.into(),
        }
    }
}

/// Errors raised while loading template configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid template configuration: {0}")]
    Json(#[from] serde_json::Error),
}
