//! Property-based checks of error visibility and message selection.
//!
//! 1. Untouched fields never report an error
//! 2. Touched fields with no active kind never report an error
//! 3. Touched fields with an active kind always report an error
//! 4. The message always comes from the first active kind
//! 5. Table selection never panics on arbitrary locale ids

use form_errors::{
    ErrorMessageResolver, ErrorTemplateTable, FieldValidationState, WidgetConfig,
};
use proptest::prelude::*;

// ── Helpers ──────────────────────────────────────────────────────────

fn kinds() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("required".to_string()),
        Just("pattern".to_string()),
        Just("email".to_string()),
        "[a-z]{1,8}",
    ]
}

fn error_flags() -> impl Strategy<Value = Vec<(String, bool)>> {
    prop::collection::vec((kinds(), any::<bool>()), 0..8)
}

fn state(flags: &[(String, bool)], touched: bool) -> FieldValidationState {
    let mut state: FieldValidationState = flags.iter().cloned().collect();
    state.set_touched(touched);
    state
}

fn resolver() -> ErrorMessageResolver {
    ErrorMessageResolver::new("en", &WidgetConfig::default())
}

// ═════════════════════════════════════════════════════════════════════════
// 1-3. has_error
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn untouched_never_has_error(flags in error_flags()) {
        prop_assert!(!resolver().has_error(&state(&flags, false)));
    }

    #[test]
    fn touched_without_active_kind_has_no_error(
        declared in prop::collection::vec(kinds(), 0..8)
    ) {
        let flags: Vec<_> = declared.into_iter().map(|k| (k, false)).collect();
        prop_assert!(!resolver().has_error(&state(&flags, true)));
    }

    #[test]
    fn touched_with_active_kind_has_error(
        flags in error_flags(),
        active in kinds(),
    ) {
        let mut state = state(&flags, true);
        state.set_error(active, true);
        prop_assert!(resolver().has_error(&state));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. First active kind decides the message
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn message_comes_from_first_active_kind(flags in error_flags()) {
        let table: ErrorTemplateTable = flags
            .iter()
            .map(|(kind, _)| (kind.clone(), format!("msg:{kind}")))
            .collect();
        let resolver = ErrorMessageResolver::with_table(table);
        let state = state(&flags, true);

        let expected = state.active_errors().next().map(|kind| format!("msg:{kind}"));
        prop_assert_eq!(resolver.get_error(&state).map(str::to_string), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Locale selection is total
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn any_locale_selects_a_builtin_table(locale in ".*") {
        let resolver = ErrorMessageResolver::new(locale.as_str(), &WidgetConfig::default());
        let table = resolver.table();
        prop_assert!(
            *table == ErrorTemplateTable::english() || *table == ErrorTemplateTable::norwegian()
        );
    }
}
