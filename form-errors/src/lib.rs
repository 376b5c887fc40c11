//! Validation error display for a single form field.
//!
//! An [`ErrorWidget`] sits inside a `<form>`, watches one named field of
//! the host form and shows at most one message for it. The message comes
//! from an [`ErrorMessageResolver`], which picks a template table once at
//! construction (English, Norwegian for a Norwegian locale, or a table
//! supplied through [`WidgetConfig`]) and resolves the first active error
//! kind against it.
//!
//! # Example
//!
//! ```
//! use form_errors::{ErrorMessageResolver, ErrorWidget, FormState, Rule, WidgetConfig};
//! use formdom::{Document, Element};
//!
//! let doc = Document::from_root(
//!     Element::form("signup").child(Element::new("handle-form-errors").id("email-errors")),
//! );
//!
//! let form = FormState::new("signup").with_field("email");
//! let resolver = ErrorMessageResolver::new("en-us", &WidgetConfig::default());
//! let widget = ErrorWidget::attach(
//!     doc.find_by_id("email-errors").unwrap(),
//!     "email",
//!     form.clone(),
//!     resolver,
//! )
//! .unwrap();
//!
//! form.validate("email", "", &[Rule::Required, Rule::Email]).unwrap();
//! assert!(!widget.has_error().unwrap()); // not touched yet
//!
//! form.touch("email").unwrap();
//! assert_eq!(widget.get_error().unwrap().as_deref(), Some("Required"));
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod locale;
pub mod provider;
pub mod resolver;
pub mod state;
pub mod templates;
pub mod widget;

pub use config::WidgetConfig;
pub use error::{ConfigError, WidgetError};
pub use form::{FormState, Rule};
pub use locale::{Locale, LocaleProvider, TemplateLanguage, NORWEGIAN_LOCALES};
pub use provider::FormFieldStateProvider;
pub use resolver::ErrorMessageResolver;
pub use state::FieldValidationState;
pub use templates::ErrorTemplateTable;
pub use widget::{ErrorWidget, FORM_TAG, INPUT_FIELD_ATTR};
