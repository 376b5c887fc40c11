//! The error display widget.

use formdom::{find_ancestor, Element, NodeRef, TreeNode};

use crate::error::WidgetError;
use crate::provider::FormFieldStateProvider;
use crate::resolver::ErrorMessageResolver;
use crate::state::FieldValidationState;

/// Tag of the element a widget must be nested in.
pub const FORM_TAG: &str = "form";

/// Markup attribute naming the observed field.
pub const INPUT_FIELD_ATTR: &str = "input-field";

/// Shows the validation error of one field of its enclosing form.
///
/// The enclosing form element is looked up once in [`ErrorWidget::attach`]
/// and cached. Field state is read from the host on every query.
///
/// # Example
///
/// ```ignore
/// <form name="signup">
///     <handle-form-errors input-field="email"></handle-form-errors>
///     <input type="email" name="email">
/// </form>
/// ```
#[derive(Debug)]
pub struct ErrorWidget<N, P> {
    field: String,
    form: P,
    form_element: N,
    resolver: ErrorMessageResolver,
}

impl<N: TreeNode, P: FormFieldStateProvider> ErrorWidget<N, P> {
    /// Bind a widget at `node` to `field` of `form`.
    ///
    /// Fails with [`WidgetError::AncestorNotFound`] if `node` is not inside a
    /// `<form>`.
    pub fn attach(
        node: N,
        field: impl Into<String>,
        form: P,
        resolver: ErrorMessageResolver,
    ) -> Result<Self, WidgetError> {
        let field = field.into();
        let form_element = find_ancestor(node, FORM_TAG)?;
        log::debug!("[widget] attached to field {field:?}");
        Ok(Self {
            field,
            form,
            form_element,
            resolver,
        })
    }

    pub fn field_name(&self) -> &str {
        &self.field
    }

    /// The enclosing form element, resolved at attach time.
    pub fn form_element(&self) -> &N {
        &self.form_element
    }

    pub fn resolver(&self) -> &ErrorMessageResolver {
        &self.resolver
    }

    fn state(&self) -> Result<FieldValidationState, WidgetError> {
        self.form
            .field_state(&self.field)
            .ok_or_else(|| WidgetError::field_not_found(&self.field))
    }

    /// Whether an error should be shown right now.
    pub fn has_error(&self) -> Result<bool, WidgetError> {
        Ok(self.resolver.has_error(&self.state()?))
    }

    /// Message for the field's first active error, if it has a template.
    pub fn get_error(&self) -> Result<Option<String>, WidgetError> {
        let state = self.state()?;
        Ok(self.resolver.get_error(&state).map(str::to_string))
    }

    /// Render `<div>` with a `<span>` holding the message while an error is
    /// shown. A kind without a template renders an empty span.
    pub fn render(&self) -> Result<Element, WidgetError> {
        let state = self.state()?;
        let container = Element::div().attr("for", &self.field);
        if !self.resolver.has_error(&state) {
            return Ok(container);
        }

        let message = self.resolver.get_error(&state).unwrap_or_default();
        Ok(container.child(Element::span(message)))
    }
}

impl<'a, P: FormFieldStateProvider> ErrorWidget<NodeRef<'a>, P> {
    /// Attach using the field named by the node's `input-field` attribute.
    pub fn from_markup(
        node: NodeRef<'a>,
        form: P,
        resolver: ErrorMessageResolver,
    ) -> Result<Self, WidgetError> {
        let field = node
            .attr(INPUT_FIELD_ATTR)
            .ok_or_else(|| WidgetError::MissingInputField {
                element: node.element_id().to_string(),
            })?;
        Self::attach(node, field, form, resolver)
    }
}
