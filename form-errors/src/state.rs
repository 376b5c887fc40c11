/// Validation state of one form field, as reported by the host form.
///
/// Error kinds keep the order in which they were first declared. That order
/// decides which message wins when several kinds are active at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValidationState {
    /// Whether the user has interacted with the field yet.
    pub touched: bool,
    errors: Vec<(String, bool)>,
}

impl FieldValidationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: mark the field as touched.
    pub fn touched(mut self) -> Self {
        self.touched = true;
        self
    }

    /// Builder: declare an error kind with its current flag.
    pub fn with_error(mut self, kind: impl Into<String>, active: bool) -> Self {
        self.set_error(kind, active);
        self
    }

    pub fn set_touched(&mut self, touched: bool) {
        self.touched = touched;
    }

    /// Set the flag for `kind`. A kind seen before keeps its position.
    pub fn set_error(&mut self, kind: impl Into<String>, active: bool) {
        let kind = kind.into();
        match self.errors.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, flag)) => *flag = active,
            None => self.errors.push((kind, active)),
        }
    }

    /// Deactivate every declared kind. Declaration order is kept.
    pub fn clear_errors(&mut self) {
        for (_, active) in &mut self.errors {
            *active = false;
        }
    }

    /// Flag for `kind`, `None` if the kind was never declared.
    pub fn error(&self, kind: &str) -> Option<bool> {
        self.errors
            .iter()
            .find(|(k, _)| k == kind)
            .map(|&(_, active)| active)
    }

    /// All declared kinds with their flags, in declaration order.
    pub fn errors(&self) -> impl Iterator<Item = (&str, bool)> {
        self.errors.iter().map(|(k, active)| (k.as_str(), *active))
    }

    /// Active kinds, in declaration order.
    pub fn active_errors(&self) -> impl Iterator<Item = &str> {
        self.errors
            .iter()
            .filter(|(_, active)| *active)
            .map(|(k, _)| k.as_str())
    }

    pub fn is_valid(&self) -> bool {
        self.active_errors().next().is_none()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for FieldValidationState {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        let mut state = Self::new();
        for (kind, active) in iter {
            state.set_error(kind, active);
        }
        state
    }
}
