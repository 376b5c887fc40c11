use form_errors::{
    ErrorMessageResolver, ErrorTemplateTable, FieldValidationState, Locale, WidgetConfig,
};

fn init_logger() {
    let _ = simplelog::TestLogger::init(simplelog::LevelFilter::Debug, simplelog::Config::default());
}

fn failing(kind: &str) -> FieldValidationState {
    FieldValidationState::new().with_error(kind, true).touched()
}

// ============================================================================
// Table selection
// ============================================================================

#[test]
fn test_norwegian_locale_messages() {
    init_logger();
    let resolver = ErrorMessageResolver::new(&Locale::new("no"), &WidgetConfig::default());
    assert_eq!(resolver.get_error(&failing("required")), Some("Påkrevd"));
    assert_eq!(resolver.get_error(&failing("pattern")), Some("Ugyldig format"));
    assert_eq!(resolver.get_error(&failing("email")), Some("Ugyldig epostadresse"));
}

#[test]
fn test_other_locale_uses_default_messages() {
    for locale in ["en-us", "de-de", "sv"] {
        let resolver = ErrorMessageResolver::new(locale, &WidgetConfig::default());
        assert_eq!(resolver.get_error(&failing("required")), Some("Required"));
        assert_eq!(resolver.get_error(&failing("pattern")), Some("Invalid format"));
        assert_eq!(resolver.get_error(&failing("email")), Some("Invalid email address"));
    }
}

#[test]
fn test_override_wins_over_locale() {
    let config = WidgetConfig::new().with_templates(ErrorTemplateTable::new().with("required", "X"));
    let resolver = ErrorMessageResolver::new("no", &config);
    assert_eq!(resolver.get_error(&failing("required")), Some("X"));
}

#[test]
fn test_override_is_not_merged() {
    let config = WidgetConfig::new().with_templates(ErrorTemplateTable::new().with("required", "X"));
    let resolver = ErrorMessageResolver::new("en", &config);
    assert_eq!(resolver.get_error(&failing("email")), None);
    assert!(resolver.has_error(&failing("email")));
}

#[test]
fn test_override_loaded_from_file() {
    let path = std::env::temp_dir().join(format!("form-errors-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"templates": {"required": "Fyll ut feltet"}}"#).unwrap();

    let config = WidgetConfig::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let resolver = ErrorMessageResolver::new("nb-no", &config);
    assert_eq!(resolver.get_error(&failing("required")), Some("Fyll ut feltet"));
}

// ============================================================================
// Message resolution
// ============================================================================

#[test]
fn test_required_before_pattern() {
    let resolver = ErrorMessageResolver::new("en", &WidgetConfig::default());
    let state = FieldValidationState::new()
        .with_error("required", true)
        .with_error("pattern", true)
        .touched();
    assert_eq!(resolver.get_error(&state), Some("Required"));
}

#[test]
fn test_active_kind_without_template_is_absent() {
    init_logger();
    let resolver = ErrorMessageResolver::new("en", &WidgetConfig::default());
    let state = failing("minlength");
    assert!(resolver.has_error(&state));
    assert_eq!(resolver.get_error(&state), None);
}

#[test]
fn test_untouched_field_hides_error() {
    let resolver = ErrorMessageResolver::new("en", &WidgetConfig::default());
    let state = FieldValidationState::new().with_error("required", true);
    assert!(!resolver.has_error(&state));
}
