//! In-memory host form.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use regex::Regex;

use crate::error::WidgetError;
use crate::provider::FormFieldStateProvider;
use crate::state::FieldValidationState;

/// A validation rule that drives one error kind.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Non-blank value. Kind `required`.
    Required,
    /// Whole value matches the regex. Kind `pattern`.
    Pattern(Regex),
    /// Valid email address. Kind `email`.
    Email,
    /// At least this many characters. Kind `minlength`.
    MinLength(usize),
    /// At most this many characters. Kind `maxlength`.
    MaxLength(usize),
}

impl Rule {
    /// Build a [`Rule::Pattern`] anchored to the whole value.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::Pattern(Regex::new(&format!("^(?:{pattern})$"))?))
    }

    /// Error kind set by this rule.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Pattern(_) => "pattern",
            Self::Email => "email",
            Self::MinLength(_) => "minlength",
            Self::MaxLength(_) => "maxlength",
        }
    }

    /// Whether `value` violates this rule.
    ///
    /// Only `Required` rejects an empty value; the others leave emptiness
    /// to it.
    pub fn fails(&self, value: &str) -> bool {
        if value.is_empty() && !matches!(self, Self::Required) {
            return false;
        }
        match self {
            Self::Required => value.trim().is_empty(),
            Self::Pattern(re) => !re.is_match(value),
            Self::Email => !email_address::EmailAddress::is_valid(value),
            Self::MinLength(min) => value.chars().count() < *min,
            Self::MaxLength(max) => value.chars().count() > *max,
        }
    }
}

#[derive(Debug, Default)]
struct FormInner {
    name: String,
    fields: HashMap<String, FieldValidationState>,
}

/// Shared validation state for every field of one form.
///
/// Cloning yields another handle to the same form, so the host can keep
/// mutating while widgets hold a clone for reading.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    inner: Arc<RwLock<FormInner>>,
}

impl FormState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(FormInner {
                name: name.into(),
                fields: HashMap::new(),
            })),
        }
    }

    /// Builder: register `field` with a pristine state.
    pub fn with_field(self, field: impl Into<String>) -> Self {
        self.register(field);
        self
    }

    fn read(&self) -> RwLockReadGuard<'_, FormInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FormInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn name(&self) -> String {
        self.read().name.clone()
    }

    /// Register `field`. An existing field keeps its state.
    pub fn register(&self, field: impl Into<String>) {
        self.write().fields.entry(field.into()).or_default();
    }

    pub fn contains(&self, field: &str) -> bool {
        self.read().fields.contains_key(field)
    }

    fn update<T>(
        &self,
        field: &str,
        f: impl FnOnce(&mut FieldValidationState) -> T,
    ) -> Result<T, WidgetError> {
        let mut guard = self.write();
        let state = guard
            .fields
            .get_mut(field)
            .ok_or_else(|| WidgetError::field_not_found(field))?;
        Ok(f(state))
    }

    /// Mark `field` as interacted with.
    pub fn touch(&self, field: &str) -> Result<(), WidgetError> {
        self.update(field, |state| state.set_touched(true))
    }

    pub fn set_error(&self, field: &str, kind: &str, active: bool) -> Result<(), WidgetError> {
        self.update(field, |state| state.set_error(kind, active))
    }

    /// Run `rules` against `value` and record each rule's flag on `field`.
    ///
    /// Kinds are declared in rule order on first validation. Kinds left
    /// over from earlier calls but absent from `rules` are deactivated.
    /// Returns whether every rule passed.
    pub fn validate(&self, field: &str, value: &str, rules: &[Rule]) -> Result<bool, WidgetError> {
        self.update(field, |state| {
            state.clear_errors();
            for rule in rules {
                state.set_error(rule.kind(), rule.fails(value));
            }
            let valid = state.is_valid();
            log::debug!("[form] validated {field:?}: valid={valid}");
            valid
        })
    }

    /// Reset every field to untouched with no declared errors.
    pub fn reset(&self) {
        for state in self.write().fields.values_mut() {
            *state = FieldValidationState::default();
        }
    }
}

impl FormFieldStateProvider for FormState {
    fn field_state(&self, field: &str) -> Option<FieldValidationState> {
        self.read().fields.get(field).cloned()
    }
}
