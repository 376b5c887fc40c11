//! Host form boundary.

use std::collections::HashMap;

use crate::state::FieldValidationState;

/// Read access to the per-field validation state of a host form.
///
/// The widget only ever reads through this trait; the host owns and
/// mutates the state.
pub trait FormFieldStateProvider {
    /// Snapshot of `field`, `None` if the form has no such field.
    fn field_state(&self, field: &str) -> Option<FieldValidationState>;
}

impl<P: FormFieldStateProvider + ?Sized> FormFieldStateProvider for &P {
    fn field_state(&self, field: &str) -> Option<FieldValidationState> {
        (**self).field_state(field)
    }
}

impl FormFieldStateProvider for HashMap<String, FieldValidationState> {
    fn field_state(&self, field: &str) -> Option<FieldValidationState> {
        self.get(field).cloned()
    }
}
