//! Error message templates.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Mapping from error kind to display message.
///
/// Looking up a kind with no entry yields `None`; a missing template is
/// never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorTemplateTable {
    messages: HashMap<String, String>,
}

impl ErrorTemplateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in English messages.
    pub fn english() -> Self {
        Self::from_iter([
            ("email", "Invalid email address"),
            ("required", "Required"),
            ("pattern", "Invalid format"),
        ])
    }

    /// Built-in Norwegian messages.
    pub fn norwegian() -> Self {
        Self::from_iter([
            ("email", "Ugyldig epostadresse"),
            ("required", "Påkrevd"),
            ("pattern", "Ugyldig format"),
        ])
    }

    /// Parse a flat JSON object of `kind: message` pairs.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with(mut self, kind: impl Into<String>, message: impl Into<String>) -> Self {
        self.insert(kind, message);
        self
    }

    pub fn insert(&mut self, kind: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(kind.into(), message.into());
    }

    pub fn get(&self, kind: &str) -> Option<&str> {
        self.messages.get(kind).map(String::as_str)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.messages.contains_key(kind)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ErrorTemplateTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            messages: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
