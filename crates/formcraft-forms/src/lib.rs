//! HTML form assembly
//!
//! This crate turns declarative form configuration into markup:
//! - Opening tags with normalized and spoofed HTTP methods
//! - Anti-forgery and method-override hidden fields
//! - Single-button action forms with native or custom confirmation
//! - Button rows with card, disable-on-submit and custom handler variants
//! - Modal dialog wrapping
//! - Field list normalization with a global disabled state
//!
//! URL resolution, session tokens and widget rendering are host capabilities,
//! passed in as [`UrlResolver`](formcraft_urls::UrlResolver), [`TokenSource`]
//! and [`FieldRenderer`].

pub mod action;
pub mod attributes;
pub mod buttons;
pub mod csrf;
pub mod error;
pub mod fieldset;
pub mod form;
pub mod html_form;
pub mod markup;
pub mod modal;
pub mod options;
pub mod validation;
pub mod widget;

pub use action::{resolve_action, resolve_target};
pub use attributes::{AttrValue, Attributes, serialize};
pub use buttons::{ButtonRow, ButtonSlot, ButtonSpec, SubmitMode};
pub use csrf::{METHOD_FIELD, SessionToken, TOKEN_FIELD, TokenSource};
pub use error::{FormError, FormResult};
pub use fieldset::{FieldConfig, FieldEntry, FieldSet, parse_fields, parse_fields_value};
pub use form::{ActionButton, ConfirmSpec, Form, FormBuilder};
pub use html_form::{HtmlForm, HtmlFormOptions};
pub use markup::{Fragment, Markup};
pub use modal::{ModalForm, ModalSpec};
pub use options::{FormOptions, FormOptionsBuilder, IntoTargetSpec, Method, Target, TargetSpec};
pub use validation::ValidationErrors;
pub use widget::{BasicFieldRenderer, FieldRenderer};
