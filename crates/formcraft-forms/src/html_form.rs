//! Full forms: parsed fields, rendered widgets and a button row

use crate::attributes::Attributes;
use crate::buttons::{ButtonRow, ButtonSlot, ButtonSpec};
use crate::error::FormResult;
use crate::fieldset::{FieldEntry, FieldSet, parse_fields};
use crate::form::Form;
use crate::markup::Fragment;
use crate::options::{FormOptions, Method, Target};
use crate::validation::ValidationErrors;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Typed bag for [`HtmlForm::set_options`]; unset fields leave the form as is
///
/// # Examples
///
/// ```
/// use formcraft_forms::HtmlFormOptions;
///
/// let options: HtmlFormOptions = serde_json::from_str(
///     r#"{"card": true, "submit_handler": "save", "buttons": {"cancel": {"label": "Back", "href": "/"}}}"#,
/// ).unwrap();
///
/// assert_eq!(options.card, Some(true));
/// assert_eq!(options.submit_handler.as_deref(), Some("save"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlFormOptions {
	pub card: Option<bool>,
	pub disable_on_submit: Option<bool>,
	pub disabled: Option<bool>,
	pub submit_handler: Option<String>,
	pub form_class: Option<String>,
	pub form_delete_class: Option<String>,
	pub has_files: Option<bool>,
	pub buttons: Option<IndexMap<String, ButtonSlot>>,
}

/// A form with fields and a button row on top of a [`Form`]
///
/// # Examples
///
/// ```
/// use formcraft_forms::{FieldConfig, Form, FormOptions, HtmlForm, SessionToken};
/// use formcraft_urls::UrlReverser;
/// use indexmap::IndexMap;
///
/// let form = Form::builder()
///     .urls(UrlReverser::new().with_current("/contact"))
///     .tokens(SessionToken::new("tok"))
///     .build()
///     .unwrap();
///
/// let html = HtmlForm::new(form)
///     .render(
///         &FormOptions::default(),
///         vec![IndexMap::from([("email".to_string(), FieldConfig::new("email"))])],
///     )
///     .unwrap();
///
/// assert!(html.starts_with(r#"<form method="POST" action="/contact" accept-charset="UTF-8" class="form">"#));
/// assert!(html.contains(r#"name="email""#));
/// assert!(html.ends_with("</form>"));
/// ```
#[derive(Debug, Clone)]
pub struct HtmlForm {
	form: Form,
	buttons: ButtonSpec,
	card: bool,
	disable_on_submit: bool,
	disabled: bool,
	submit_handler: Option<String>,
	form_class: Option<String>,
	form_delete_class: Option<String>,
	has_files: bool,
	errors: ValidationErrors,
}

impl HtmlForm {
	pub fn new(form: Form) -> Self {
		Self {
			form,
			buttons: ButtonSpec::default(),
			card: false,
			disable_on_submit: false,
			disabled: false,
			submit_handler: None,
			form_class: None,
			form_delete_class: None,
			has_files: false,
			errors: ValidationErrors::new(),
		}
	}

	pub fn form(&self) -> &Form {
		&self.form
	}

	pub fn buttons(&self) -> &ButtonSpec {
		&self.buttons
	}

	pub fn is_disabled(&self) -> bool {
		self.disabled
	}

	pub fn card(mut self, card: bool) -> Self {
		self.card = card;
		self
	}

	/// Swap the submit label for a spinner and disable the button on click
	pub fn disable_on_submit(mut self, enabled: bool) -> Self {
		self.disable_on_submit = enabled;
		self
	}

	/// Client-side handler invoked instead of a native submit
	pub fn submit_handler(mut self, handler: impl Into<String>) -> Self {
		self.submit_handler = Some(handler.into());
		self
	}

	pub fn form_class(mut self, class: impl Into<String>) -> Self {
		self.form_class = Some(class.into());
		self
	}

	pub fn form_delete_class(mut self, class: impl Into<String>) -> Self {
		self.form_delete_class = Some(class.into());
		self
	}

	pub fn with_files(mut self, files: bool) -> Self {
		self.has_files = files;
		self
	}

	pub fn with_errors(mut self, errors: ValidationErrors) -> Self {
		self.errors = errors;
		self
	}

	pub fn confirm(mut self, message: impl Into<String>) -> Self {
		self.form = self.form.confirm(message);
		self
	}

	pub fn confirm_with(mut self, message: impl Into<String>, handler: impl Into<String>) -> Self {
		self.form = self.form.confirm_with(message, handler);
		self
	}

	pub fn with_model(mut self, model: serde_json::Value) -> Self {
		self.form = self.form.with_model(model);
		self
	}

	pub fn button(mut self, name: impl Into<String>, slot: ButtonSlot) -> Self {
		self.buttons.set(name, slot);
		self
	}

	/// Set or clear the label of a slot; an unlabeled slot is not rendered
	pub fn button_label(mut self, name: &str, label: Option<&str>) -> Self {
		self.buttons.set_label(name, label.map(str::to_string));
		self
	}

	pub fn button_link(mut self, name: &str, href: impl Into<String>) -> Self {
		self.buttons.set_href(name, href);
		self
	}

	pub fn button_class(mut self, name: &str, class: impl Into<String>) -> Self {
		self.buttons.set_class(name, class);
		self
	}

	/// Disable every field parsed from now on and drop the button row
	pub fn disable(mut self) -> Self {
		self.disabled = true;
		self
	}

	/// [`HtmlForm::disable`] when `predicate` holds
	pub fn disabled_when(self, predicate: impl FnOnce() -> bool) -> Self {
		if predicate() { self.disable() } else { self }
	}

	pub fn set_options(mut self, options: HtmlFormOptions) -> Self {
		if let Some(card) = options.card {
			self.card = card;
		}
		if let Some(enabled) = options.disable_on_submit {
			self.disable_on_submit = enabled;
		}
		if let Some(disabled) = options.disabled {
			self.disabled = disabled;
		}
		if let Some(handler) = options.submit_handler {
			self.submit_handler = Some(handler);
		}
		if let Some(class) = options.form_class {
			self.form_class = Some(class);
		}
		if let Some(class) = options.form_delete_class {
			self.form_delete_class = Some(class);
		}
		if let Some(files) = options.has_files {
			self.has_files = files;
		}
		if let Some(buttons) = options.buttons {
			let mut spec = ButtonSpec::empty();
			for (name, slot) in buttons {
				spec.set(name, slot);
			}
			self.buttons.merge(spec);
		}
		self
	}

	/// Normalize a field list, applying the current disabled state
	pub fn parse_fields(&self, fields: Vec<FieldEntry>) -> FormResult<FieldSet> {
		parse_fields(fields, self.disabled)
	}

	/// One section holding every field, in declaration order
	pub fn sections(&self, fields: Vec<FieldEntry>) -> FormResult<Vec<Vec<String>>> {
		let parsed = self.parse_fields(fields)?;
		Ok(vec![parsed.into_keys().collect()])
	}

	/// Button row and closing tag
	pub fn button_row(&self) -> FormResult<String> {
		self.row().build(self.form.urls.as_ref(), self.form.renderer.as_ref())
	}

	fn row(&self) -> ButtonRow<'_> {
		ButtonRow {
			buttons: &self.buttons,
			config: &self.form.config,
			disabled: self.disabled,
			card: self.card,
			disable_on_submit: self.disable_on_submit,
			submit_handler: self.submit_handler.as_deref(),
			confirm: self.form.confirm.as_ref(),
		}
	}

	/// Effective tag options: instance class over caller class over config
	fn tag_options(&self, options: &FormOptions) -> FormOptions {
		let class = self
			.form_class
			.clone()
			.or_else(|| options.class().map(str::to_string))
			.unwrap_or_else(|| self.form.config.form_class.clone());

		let mut effective = options
			.with_class(class)
			.with_files(self.has_files || options.files());
		if let Some(id) = self.form.explicit_id() {
			effective = effective.with_default_attr("id", id);
		}
		effective
	}

	/// Parse `fields`, open the form, render each field and the button row
	///
	/// Nothing is returned unless every step succeeds.
	pub fn render(&self, options: &FormOptions, fields: Vec<FieldEntry>) -> FormResult<String> {
		let parsed = self.parse_fields(fields)?;
		self.render_parsed(options, &parsed)
	}

	/// Render an already parsed field set
	pub fn render_parsed(&self, options: &FormOptions, fields: &FieldSet) -> FormResult<String> {
		let options = self.tag_options(options);
		let renderer = self.form.renderer.as_ref();

		let mut markup = self.form.open_tag(&options)?;
		markup
			.extend(self.form.payload_fragments())
			.extend(self.form.appendage(options.method()));

		for (name, config) in fields {
			let html = renderer.field(
				name,
				config,
				self.form.model_value(name),
				self.errors.get(name),
			);
			markup.push(Fragment::Raw(html));
		}
		markup.extend(self.row().fragments(self.form.urls.as_ref())?);

		tracing::debug!(
			fields = fields.len(),
			disabled = self.disabled,
			card = self.card,
			"rendered form"
		);
		Ok(markup.render(renderer))
	}

	/// Single-button delete form for `target`
	///
	/// Uses the delete form class and the `delete` slot's label and class.
	pub fn delete_form(&self, target: impl Into<Target>) -> FormResult<String> {
		let config = &self.form.config;
		let class = self
			.form_delete_class
			.clone()
			.unwrap_or_else(|| config.delete_form_class.clone());
		let options = FormOptions::builder()
			.method(Method::Delete)
			.target(target.into())
			.class(class)
			.build();

		let label = self.buttons.label("delete").unwrap_or("Delete");
		let button_class = self
			.buttons
			.class_for("delete", config)
			.unwrap_or(&config.delete_class);

		let markup = self
			.form
			.action_markup(&options, label, button_class, &Attributes::new())?;
		Ok(markup.render(self.form.renderer.as_ref()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::csrf::SessionToken;
	use crate::fieldset::FieldConfig;
	use formcraft_urls::UrlReverser;
	use rstest::{fixture, rstest};

	#[fixture]
	fn html_form() -> HtmlForm {
		let mut urls = UrlReverser::new().with_current("/posts/create");
		urls.register_path("posts.destroy", "/posts/{post}");
		let form = Form::builder()
			.urls(urls)
			.tokens(SessionToken::new("tok"))
			.build()
			.unwrap();
		HtmlForm::new(form)
	}

	fn fields(names: &[&str]) -> Vec<FieldEntry> {
		names
			.iter()
			.map(|name| IndexMap::from([(name.to_string(), FieldConfig::default())]))
			.collect()
	}

	#[rstest]
	fn test_class_precedence(html_form: HtmlForm) {
		let options = FormOptions::builder().class("from-options").build();

		let html = html_form.clone().render(&options, fields(&["a"])).unwrap();
		assert!(html.contains(r#"class="from-options""#));

		let html = html_form
			.form_class("from-instance")
			.render(&options, fields(&["a"]))
			.unwrap();
		assert!(html.contains(r#"class="from-instance""#));
	}

	#[rstest]
	fn test_disabled_when(html_form: HtmlForm) {
		assert!(!html_form.clone().disabled_when(|| false).is_disabled());
		assert!(html_form.disabled_when(|| true).is_disabled());
	}

	#[rstest]
	fn test_sections_follow_declaration_order(html_form: HtmlForm) {
		let sections = html_form.sections(fields(&["title", "body", "tags"])).unwrap();
		assert_eq!(sections, vec![vec!["title", "body", "tags"]]);
	}

	#[rstest]
	fn test_set_options_merges_buttons(html_form: HtmlForm) {
		let options: HtmlFormOptions = serde_json::from_value(serde_json::json!({
			"card": true,
			"buttons": {"submit": {"label": "Save"}, "cancel": {"label": "Back", "href": "/posts"}}
		}))
		.unwrap();

		let html = html_form.set_options(options).button_row().unwrap();
		assert!(html.starts_with(r#"<div class="card-footer">"#));
		assert!(html.contains(r#"<a href="/posts" class="btn btn-secondary">Back</a>"#));
		assert!(html.contains(">Save</button>"));
	}

	#[rstest]
	fn test_explicit_form_id_becomes_id_attribute(html_form: HtmlForm) {
		let html_form = HtmlForm::new(html_form.form().clone().with_form_id("post-form"));
		let html = html_form
			.render(&FormOptions::default(), fields(&["a"]))
			.unwrap();
		assert!(html.starts_with(r#"<form method="POST" action="/posts/create" accept-charset="UTF-8" class="form" id="post-form">"#));
	}

	#[rstest]
	fn test_delete_form(html_form: HtmlForm) {
		let html = html_form
			.button_label("delete", Some("Remove"))
			.confirm("Delete it?")
			.delete_form(Target::route(crate::options::TargetSpec::new("posts.destroy").param(9)))
			.unwrap();

		assert_eq!(
			html,
			concat!(
				r#"<form method="POST" action="/posts/9" accept-charset="UTF-8" class="form-inline">"#,
				r#"<input type="hidden" name="_method" value="DELETE">"#,
				r#"<input type="hidden" name="_token" value="tok">"#,
				r#"<button class="btn btn-danger" onclick="return confirm('Delete it?')" type="submit">Remove</button>"#,
				"</form>"
			)
		);
	}

	#[rstest]
	fn test_failed_resolution_returns_error(html_form: HtmlForm) {
		let options = FormOptions::builder().route("unknown").build();
		assert!(html_form.render(&options, fields(&["a"])).is_err());
	}
}
