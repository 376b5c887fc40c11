use crate::config::WidgetConfig;
use crate::locale::{LocaleProvider, TemplateLanguage};
use crate::state::FieldValidationState;
use crate::templates::ErrorTemplateTable;

/// Picks the single message to display for a field.
///
/// The template table is chosen once, at construction, and never changes:
///
/// 1. English by default.
/// 2. Norwegian when the locale is one of [`crate::NORWEGIAN_LOCALES`].
/// 3. `config.templates` when present, regardless of locale.
#[derive(Debug, Clone)]
pub struct ErrorMessageResolver {
    table: ErrorTemplateTable,
}

impl ErrorMessageResolver {
    pub fn new<L: LocaleProvider + ?Sized>(locale: &L, config: &WidgetConfig) -> Self {
        let locale_id = locale.locale_id();

        let table = match &config.templates {
            Some(templates) => {
                log::debug!("[resolver] using configured templates (locale {locale_id:?} ignored)");
                templates.clone()
            }
            None => {
                let language = TemplateLanguage::for_locale(&locale_id);
                log::debug!("[resolver] locale {locale_id:?} selects {language:?} templates");
                language.table()
            }
        };

        Self { table }
    }

    /// Use `table` as is, skipping locale selection.
    pub fn with_table(table: ErrorTemplateTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ErrorTemplateTable {
        &self.table
    }

    /// A field reports an error only once touched and with an active kind.
    pub fn has_error(&self, state: &FieldValidationState) -> bool {
        state.touched && !state.is_valid()
    }

    /// Message for the first active kind, in declaration order.
    ///
    /// Returns `None` when no kind is active or when the first active kind
    /// has no template.
    pub fn get_error<'a>(&'a self, state: &FieldValidationState) -> Option<&'a str> {
        let kind = state.active_errors().next()?;
        let message = self.table.get(kind);
        if message.is_none() {
            log::debug!("[resolver] no template for error kind {kind:?}");
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touched(errors: &[(&str, bool)]) -> FieldValidationState {
        errors.iter().copied().collect::<FieldValidationState>().touched()
    }

    #[test]
    fn test_untouched_never_has_error() {
        let resolver = ErrorMessageResolver::new("en", &WidgetConfig::default());
        let state = FieldValidationState::new().with_error("required", true);
        assert!(!resolver.has_error(&state));
    }

    #[test]
    fn test_first_declared_kind_wins() {
        let resolver = ErrorMessageResolver::new("en", &WidgetConfig::default());
        let state = touched(&[("required", true), ("pattern", true)]);
        assert_eq!(resolver.get_error(&state), Some("Required"));

        let state = touched(&[("pattern", true), ("required", true)]);
        assert_eq!(resolver.get_error(&state), Some("Invalid format"));
    }

    #[test]
    fn test_inactive_kinds_are_skipped() {
        let resolver = ErrorMessageResolver::new("en", &WidgetConfig::default());
        let state = touched(&[("required", false), ("email", true)]);
        assert_eq!(resolver.get_error(&state), Some("Invalid email address"));
    }

    #[test]
    fn test_no_active_error_is_absent() {
        let resolver = ErrorMessageResolver::new("en", &WidgetConfig::default());
        assert_eq!(resolver.get_error(&touched(&[("required", false)])), None);
        assert_eq!(resolver.get_error(&FieldValidationState::new()), None);
    }

    #[test]
    fn test_with_table() {
        let resolver = ErrorMessageResolver::with_table(ErrorTemplateTable::new().with("min", "Too small"));
        assert_eq!(resolver.get_error(&touched(&[("min", true)])), Some("Too small"));
    }
}
