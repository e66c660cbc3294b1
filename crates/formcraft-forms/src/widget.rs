//! Field widget rendering capability
//!
//! Form assembly never renders controls itself. Hidden fields, buttons and
//! visible fields all go through a [`FieldRenderer`] so hosts can plug in
//! their own widget library.

use crate::attributes::{Attributes, escape_attr, escape_html};
use crate::fieldset::FieldConfig;
use serde_json::Value;
use std::sync::Arc;

/// Renders individual form controls
pub trait FieldRenderer: Send + Sync {
	/// `<input type="{kind}" name="{name}" ...>`
	fn input(&self, kind: &str, name: &str, value: Option<&str>, attrs: &Attributes) -> String;

	/// `<button ...>{label}</button>`; `label` is trusted markup
	fn button(&self, label: &str, attrs: &Attributes) -> String;

	/// A complete visible field with its current value and error messages
	fn field(&self, name: &str, config: &FieldConfig, value: Option<&Value>, errors: &[String])
	-> String;
}

impl<T: FieldRenderer + ?Sized> FieldRenderer for Arc<T> {
	fn input(&self, kind: &str, name: &str, value: Option<&str>, attrs: &Attributes) -> String {
		(**self).input(kind, name, value, attrs)
	}

	fn button(&self, label: &str, attrs: &Attributes) -> String {
		(**self).button(label, attrs)
	}

	fn field(
		&self,
		name: &str,
		config: &FieldConfig,
		value: Option<&Value>,
		errors: &[String],
	) -> String {
		(**self).field(name, config, value, errors)
	}
}

/// Minimal renderer producing plain HTML controls
///
/// # Examples
///
/// ```
/// use formcraft_forms::{Attributes, BasicFieldRenderer, FieldRenderer};
///
/// let html = BasicFieldRenderer.input("hidden", "_method", Some("PUT"), &Attributes::new());
/// assert_eq!(html, r#"<input type="hidden" name="_method" value="PUT">"#);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicFieldRenderer;

/// Plain-text form of a JSON scalar used as a field value
pub fn value_to_string(value: &Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::String(s) => Some(s.clone()),
		Value::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
		other => Some(other.to_string()),
	}
}

impl FieldRenderer for BasicFieldRenderer {
	fn input(&self, kind: &str, name: &str, value: Option<&str>, attrs: &Attributes) -> String {
		let mut all = Attributes::new().with("type", kind).with("name", name);
		all.insert("value", value);
		all.merge(attrs.clone());
		format!("<input{}>", all)
	}

	fn button(&self, label: &str, attrs: &Attributes) -> String {
		format!("<button{}>{}</button>", attrs, label)
	}

	fn field(
		&self,
		name: &str,
		config: &FieldConfig,
		value: Option<&Value>,
		errors: &[String],
	) -> String {
		let text = value.and_then(value_to_string);
		let mut attrs = Attributes::new().with("id", name);
		if !errors.is_empty() {
			attrs.insert("class", "is-invalid");
		}
		attrs.merge(Attributes::from(config.attributes.clone()));

		let mut html = String::from(r#"<div class="form-group">"#);
		if let Some(label) = &config.label {
			html.push_str(&format!(
				r#"<label for="{}">{}</label>"#,
				escape_attr(name),
				escape_html(label)
			));
		}

		match config.field_type.as_str() {
			"textarea" => {
				let mut all = Attributes::new().with("name", name);
				all.merge(attrs);
				html.push_str(&format!(
					"<textarea{}>{}</textarea>",
					all,
					escape_html(text.as_deref().unwrap_or_default())
				));
			}
			"checkbox" => {
				let checked = value.is_some_and(|v| matches!(v, Value::Bool(true)) || *v == "1");
				attrs.insert("checked", checked);
				html.push_str(&self.input("checkbox", name, Some("1"), &attrs));
			}
			kind => html.push_str(&self.input(kind, name, text.as_deref(), &attrs)),
		}

		for error in errors {
			html.push_str(&format!(
				r#"<div class="invalid-feedback">{}</div>"#,
				escape_html(error)
			));
		}
		html.push_str("</div>");
		html
	}
}
