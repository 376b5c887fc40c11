//! Locale input and built-in table selection.

use crate::templates::ErrorTemplateTable;

/// Locale ids that select the Norwegian table.
pub const NORWEGIAN_LOCALES: [&str; 3] = ["nb-no", "no-no", "no"];

/// Source of the active locale id.
pub trait LocaleProvider {
    fn locale_id(&self) -> String;
}

impl LocaleProvider for str {
    fn locale_id(&self) -> String {
        self.to_string()
    }
}

impl LocaleProvider for String {
    fn locale_id(&self) -> String {
        self.clone()
    }
}

/// A fixed locale id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Locale {
    id: String,
}

impl Locale {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl LocaleProvider for Locale {
    fn locale_id(&self) -> String {
        self.id.clone()
    }
}

/// Lowercase and use `-` as the separator, so `nb_NO` reads as `nb-no`.
pub fn normalize_locale_id(id: &str) -> String {
    id.trim().to_ascii_lowercase().replace('_', "-")
}

/// Language of a built-in template table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateLanguage {
    #[default]
    English,
    Norwegian,
}

impl TemplateLanguage {
    pub fn for_locale(id: &str) -> Self {
        let id = normalize_locale_id(id);
        if NORWEGIAN_LOCALES.contains(&id.as_str()) {
            Self::Norwegian
        } else {
            Self::English
        }
    }

    pub fn table(self) -> ErrorTemplateTable {
        match self {
            Self::English => ErrorTemplateTable::english(),
            Self::Norwegian => ErrorTemplateTable::norwegian(),
        }
    }
}
