//! Modal dialog shell around an assembled form

use crate::attributes::{Attributes, escape_html, escape_javascript};
use crate::error::FormResult;
use crate::form::{ActionButton, Form};
use crate::markup::{Fragment, Markup};
use crate::options::{IntoTargetSpec, Method, Target};
use crate::widget::FieldRenderer;
use indexmap::IndexMap;

/// Title used when none is set
pub const DEFAULT_MODAL_TITLE: &str = "Confirmation";

/// Suffix appended to the form id to name its modal
pub const MODAL_ID_SUFFIX: &str = "_Modal";

/// Values shown in the modal and on its trigger
///
/// # Examples
///
/// ```
/// use formcraft_forms::{BasicFieldRenderer, ModalSpec, modal};
///
/// let spec = ModalSpec::new().message("Really?").trigger_label("Open");
/// let html = modal::wrap("<form></form>", "abc_Modal", &spec, &BasicFieldRenderer);
///
/// assert!(html.starts_with(r#"<div id="abc_Modal" class="modal fade""#));
/// assert!(html.contains("Really?<form></form>"));
/// assert!(html.ends_with(r#"<button onclick="$('#abc_Modal').modal('show')">Open</button>"#));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalSpec {
	pub title: String,
	pub message: Option<String>,
	/// Trusted markup
	pub trigger_label: String,
	pub trigger_class: Option<String>,
}

impl ModalSpec {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	pub fn message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn trigger_label(mut self, label: impl Into<String>) -> Self {
		self.trigger_label = label.into();
		self
	}

	pub fn trigger_class(mut self, class: impl Into<String>) -> Self {
		self.trigger_class = Some(class.into());
		self
	}

	/// Dialog shell followed by its trigger button
	pub fn fragments(&self, inner: &str, modal_id: &str) -> Markup {
		let mut markup = Markup::new();
		markup
			.push(Fragment::open(
				"div",
				Attributes::new()
					.with("id", modal_id)
					.with("class", "modal fade")
					.with("tabindex", "-1")
					.with("role", "dialog"),
			))
			.push(Fragment::open(
				"div",
				Attributes::new()
					.with("class", "modal-dialog")
					.with("role", "document"),
			))
			.push(Fragment::div("modal-content"))
			.push(Fragment::div("modal-header"))
			.push(Fragment::Raw(format!(
				r#"<h5 class="modal-title">{}</h5>"#,
				escape_html(&self.title)
			)))
			.push(Fragment::button(
				r#"<span aria-hidden="true">&times;</span>"#,
				Attributes::new()
					.with("type", "button")
					.with("class", "close")
					.with("data-dismiss", "modal")
					.with("aria-label", "Close"),
			))
			.push(Fragment::Close("div"))
			.push(Fragment::div("modal-body"));

		if let Some(message) = &self.message {
			markup.push(Fragment::Raw(escape_html(message)));
		}

		markup
			.push(Fragment::Raw(inner.to_string()))
			.push(Fragment::Close("div"))
			.push(Fragment::Close("div"))
			.push(Fragment::Close("div"))
			.push(Fragment::Close("div"))
			.push(Fragment::button(
				self.trigger_label.clone(),
				Attributes::new()
					.with(
						"onclick",
						format!("$('#{}').modal('show')", escape_javascript(modal_id)),
					)
					.with("class", self.trigger_class.clone()),
			));
		markup
	}
}

impl Default for ModalSpec {
	fn default() -> Self {
		Self {
			title: DEFAULT_MODAL_TITLE.to_string(),
			message: None,
			trigger_label: String::new(),
			trigger_class: None,
		}
	}
}

/// Wrap `inner` in a modal dialog named `modal_id`
pub fn wrap(inner: &str, modal_id: &str, spec: &ModalSpec, renderer: &dyn FieldRenderer) -> String {
	tracing::debug!(modal_id, "wrapping form in modal");
	spec.fragments(inner, modal_id).render(renderer)
}

/// Quick-action form shown in a modal, opened by a trigger button
///
/// # Examples
///
/// ```
/// use formcraft_forms::{Form, ModalForm, SessionToken};
/// use formcraft_urls::UrlReverser;
///
/// let mut urls = UrlReverser::new();
/// urls.register_path("posts.archive", "/posts/{post}/archive");
///
/// let form = Form::builder()
///     .urls(urls)
///     .tokens(SessionToken::new("tok"))
///     .form_id("post7")
///     .build()
///     .unwrap();
///
/// let html = ModalForm::new(("posts.archive", ["7"]))
///     .content("Archive")
///     .message("Archive this post?")
///     .trigger_content("Archive...")
///     .render(form)
///     .unwrap();
///
/// assert!(html.contains(r#"id="post7_Modal""#));
/// assert!(html.contains(r#"action="/posts/7/archive""#));
/// ```
#[derive(Debug, Clone)]
pub struct ModalForm {
	target: Target,
	method: Method,
	content: String,
	message: String,
	payload: IndexMap<String, String>,
	button_attrs: Attributes,
	trigger_content: String,
	trigger_class: Option<String>,
}

impl ModalForm {
	/// Modal form posting to a named route
	pub fn new(route: impl IntoTargetSpec) -> Self {
		Self {
			target: Target::Route(route.into_target_spec()),
			method: Method::Post,
			content: String::new(),
			message: String::new(),
			payload: IndexMap::new(),
			button_attrs: Attributes::new(),
			trigger_content: "Trigger".to_string(),
			trigger_class: None,
		}
	}

	pub fn method(mut self, method: impl Into<Method>) -> Self {
		self.method = method.into();
		self
	}

	/// Label of the submit button inside the modal
	pub fn content(mut self, content: impl Into<String>) -> Self {
		self.content = content.into();
		self
	}

	pub fn message(mut self, message: impl Into<String>) -> Self {
		self.message = message.into();
		self
	}

	pub fn payload<K, V>(mut self, values: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: ToString,
	{
		self.payload = values
			.into_iter()
			.map(|(k, v)| (k.into(), v.to_string()))
			.collect();
		self
	}

	pub fn button_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.button_attrs.insert(name, value.into());
		self
	}

	pub fn trigger_content(mut self, content: impl Into<String>) -> Self {
		self.trigger_content = content.into();
		self
	}

	pub fn trigger_class(mut self, class: impl Into<String>) -> Self {
		self.trigger_class = Some(class.into());
		self
	}

	/// Assemble the action form on `form` and return it wrapped in its modal
	pub fn render(&self, form: Form) -> FormResult<String> {
		let button = ActionButton::new(self.content.clone())
			.attrs(self.button_attrs.clone())
			.as_modal(true);

		let form = form
			.payload(self.payload.clone())
			.set_modal(
				self.trigger_content.clone(),
				self.trigger_class.clone(),
				self.message.clone(),
			)
			.action_to(self.method.clone(), self.target.clone(), button)?;

		Ok(form.to_string())
	}
}
