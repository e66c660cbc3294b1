//! Form assembly: opening and closing tags, hidden appendage fields and
//! single-button action forms
//!
//! A [`Form`] is built once per render from the host capabilities (URL
//! resolution, session token, field rendering) and a resolved
//! [`RenderConfig`]. Configuration calls consume and return the form; terminal
//! calls produce markup.
//!
//! ## Example
//!
//! ```
//! use formcraft_forms::{ActionButton, Form, SessionToken};
//! use formcraft_urls::UrlReverser;
//!
//! let mut urls = UrlReverser::new();
//! urls.register_path("users.destroy", "/users/{user}");
//!
//! let form = Form::builder()
//!     .urls(urls)
//!     .tokens(SessionToken::new("secret"))
//!     .build()
//!     .unwrap();
//!
//! let html = form
//!     .confirm("Are you sure?")
//!     .action("delete", ("users.destroy", ["5"]), ActionButton::new("Delete"))
//!     .unwrap()
//!     .to_string();
//!
//! assert!(html.starts_with(r#"<form method="POST" action="/users/5""#));
//! assert!(html.contains(r#"<input type="hidden" name="_method" value="DELETE">"#));
//! assert!(html.contains(r#"onclick="return confirm('Are you sure?')""#));
//! ```

use crate::action::resolve_action;
use crate::attributes::{Attributes, escape_javascript};
use crate::csrf::{METHOD_FIELD, TOKEN_FIELD, TokenSource, random_id};
use crate::error::{FormError, FormResult};
use crate::markup::{Fragment, Markup};
use crate::modal::{self, MODAL_ID_SUFFIX, ModalSpec};
use crate::options::{FormOptions, IntoTargetSpec, Method, Target};
use crate::widget::{BasicFieldRenderer, FieldRenderer};
use formcraft_conf::{ConfigLookup, RenderConfig};
use formcraft_urls::UrlResolver;
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Length of generated form identifiers
pub const FORM_ID_LENGTH: usize = 10;

/// Confirmation wired onto a submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmSpec {
	pub message: String,
	/// Client-side handler replacing the native dialog
	pub handler: Option<String>,
}

impl ConfirmSpec {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			handler: None,
		}
	}

	pub fn with_handler(message: impl Into<String>, handler: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			handler: Some(handler.into()),
		}
	}

	/// Click attribute of the confirmed button
	///
	/// # Examples
	///
	/// ```
	/// use formcraft_forms::ConfirmSpec;
	///
	/// assert_eq!(ConfirmSpec::new("Sure?").onclick(), "return confirm('Sure?')");
	/// assert_eq!(
	///     ConfirmSpec::with_handler("Sure?", "askFirst").onclick(),
	///     "askFirst(event, 'Sure?')"
	/// );
	/// ```
	pub fn onclick(&self) -> String {
		match &self.handler {
			Some(_) => self.prompt(),
			None => format!("return {}", self.prompt()),
		}
	}

	/// Statement that stops the click unless the prompt is accepted, for
	/// chaining in front of another click script
	///
	/// A custom handler accepts by returning a truthy value.
	///
	/// # Examples
	///
	/// ```
	/// use formcraft_forms::ConfirmSpec;
	///
	/// assert_eq!(ConfirmSpec::new("Sure?").guard(), "if (!confirm('Sure?')) return false;");
	/// ```
	pub fn guard(&self) -> String {
		format!("if (!{}) return false;", self.prompt())
	}

	fn prompt(&self) -> String {
		let message = escape_javascript(&self.message);
		match &self.handler {
			Some(handler) => format!("{}(event, '{}')", handler, message),
			None => format!("confirm('{}')", message),
		}
	}
}

/// The single button of an action form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
	/// Trusted markup
	pub label: String,
	pub attrs: Attributes,
	pub as_modal: bool,
}

impl ActionButton {
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			attrs: Attributes::new(),
			as_modal: false,
		}
	}

	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.insert(name, value.into());
		self
	}

	/// Merge extra attributes; they override the configured class
	pub fn attrs(mut self, attrs: Attributes) -> Self {
		self.attrs.merge(attrs);
		self
	}

	/// Replace the assembled form with its modal-wrapped version
	pub fn as_modal(mut self, as_modal: bool) -> Self {
		self.as_modal = as_modal;
		self
	}
}

impl Default for ActionButton {
	fn default() -> Self {
		Self::new("Send")
	}
}

impl From<&str> for ActionButton {
	fn from(label: &str) -> Self {
		Self::new(label)
	}
}

/// Modal values set on the instance; they win over `as_modal` arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ModalValues {
	title: Option<String>,
	message: Option<String>,
	trigger_label: Option<String>,
	trigger_class: Option<String>,
}

/// Form assembler
#[derive(Clone)]
pub struct Form {
	pub(crate) urls: Arc<dyn UrlResolver>,
	pub(crate) tokens: Arc<dyn TokenSource>,
	pub(crate) renderer: Arc<dyn FieldRenderer>,
	pub(crate) config: RenderConfig,
	reactive: bool,
	model: Option<Value>,
	payload: IndexMap<String, String>,
	pub(crate) confirm: Option<ConfirmSpec>,
	explicit_id: Option<String>,
	generated_id: String,
	modal: ModalValues,
	html: String,
}

impl fmt::Debug for Form {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Form")
			.field("form_id", &self.form_id())
			.field("reactive", &self.reactive)
			.field("payload", &self.payload)
			.field("confirm", &self.confirm)
			.field("html", &self.html)
			.finish_non_exhaustive()
	}
}

/// Builder collecting the host capabilities a [`Form`] needs
#[derive(Default)]
pub struct FormBuilder {
	urls: Option<Arc<dyn UrlResolver>>,
	tokens: Option<Arc<dyn TokenSource>>,
	renderer: Option<Arc<dyn FieldRenderer>>,
	config: Option<RenderConfig>,
	form_id: Option<String>,
}

impl FormBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn urls(mut self, urls: impl UrlResolver + 'static) -> Self {
		self.urls = Some(Arc::new(urls));
		self
	}

	pub fn shared_urls(mut self, urls: Arc<dyn UrlResolver>) -> Self {
		self.urls = Some(urls);
		self
	}

	pub fn tokens(mut self, tokens: impl TokenSource + 'static) -> Self {
		self.tokens = Some(Arc::new(tokens));
		self
	}

	pub fn shared_tokens(mut self, tokens: Arc<dyn TokenSource>) -> Self {
		self.tokens = Some(tokens);
		self
	}

	pub fn renderer(mut self, renderer: impl FieldRenderer + 'static) -> Self {
		self.renderer = Some(Arc::new(renderer));
		self
	}

	pub fn config(mut self, config: RenderConfig) -> Self {
		self.config = Some(config);
		self
	}

	/// Resolve the render configuration from `lookup` now
	pub fn config_from(self, lookup: &dyn ConfigLookup) -> Self {
		self.config(RenderConfig::resolve(lookup))
	}

	pub fn form_id(mut self, id: impl Into<String>) -> Self {
		self.form_id = Some(id.into());
		self
	}

	/// Fails with [`FormError::MissingCapability`] when the URL resolver or
	/// the token source is missing
	pub fn build(self) -> FormResult<Form> {
		let urls = self
			.urls
			.ok_or(FormError::MissingCapability("url resolver"))?;
		let tokens = self
			.tokens
			.ok_or(FormError::MissingCapability("token source"))?;

		Ok(Form {
			urls,
			tokens,
			renderer: self
				.renderer
				.unwrap_or_else(|| Arc::new(BasicFieldRenderer)),
			config: self.config.unwrap_or_default(),
			reactive: false,
			model: None,
			payload: IndexMap::new(),
			confirm: None,
			explicit_id: self.form_id,
			generated_id: random_id(FORM_ID_LENGTH),
			modal: ModalValues::default(),
			html: String::new(),
		})
	}
}

impl Form {
	pub fn builder() -> FormBuilder {
		FormBuilder::new()
	}

	pub fn config(&self) -> &RenderConfig {
		&self.config
	}

	/// Hidden fields emitted before the appendage of an action form
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

	/// Ask for native confirmation before submitting
	pub fn confirm(mut self, message: impl Into<String>) -> Self {
		self.confirm = Some(ConfirmSpec::new(message));
		self
	}

	/// Hand confirmation to a client-side handler
	pub fn confirm_with(mut self, message: impl Into<String>, handler: impl Into<String>) -> Self {
		self.confirm = Some(ConfirmSpec::with_handler(message, handler));
		self
	}

	/// Reactive components submit out-of-band: no method, action or
	/// appendage fields are emitted
	pub fn reactive(mut self, reactive: bool) -> Self {
		self.reactive = reactive;
		self
	}

	pub fn is_reactive(&self) -> bool {
		self.reactive
	}

	/// Bind a model whose members supply field values
	pub fn with_model(mut self, model: Value) -> Self {
		self.model = Some(model);
		self
	}

	pub fn model(&self) -> Option<&Value> {
		self.model.as_ref()
	}

	/// Value of `field` on the bound model
	pub fn model_value(&self, field: &str) -> Option<&Value> {
		self.model.as_ref()?.get(field)
	}

	pub fn with_form_id(mut self, id: impl Into<String>) -> Self {
		self.explicit_id = Some(id.into());
		self
	}

	/// The explicit identifier, or the one generated when the form was built
	pub fn form_id(&self) -> &str {
		self.explicit_id.as_deref().unwrap_or(&self.generated_id)
	}

	pub(crate) fn explicit_id(&self) -> Option<&str> {
		self.explicit_id.as_deref()
	}

	pub fn modal_id(&self) -> String {
		format!("{}{}", self.form_id(), MODAL_ID_SUFFIX)
	}

	/// Instance modal values, preferred over the arguments of [`Form::as_modal`]
	pub fn set_modal(
		mut self,
		trigger_label: impl Into<String>,
		trigger_class: Option<String>,
		message: impl Into<String>,
	) -> Self {
		self.modal.trigger_label = Some(trigger_label.into());
		self.modal.trigger_class = trigger_class;
		self.modal.message = Some(message.into());
		self
	}

	pub fn modal_title(mut self, title: impl Into<String>) -> Self {
		self.modal.title = Some(title.into());
		self
	}

	/// Markup assembled by the last terminal call
	pub fn html(&self) -> &str {
		&self.html
	}

	/// Opening tag plus the `_method` and `_token` fields
	///
	/// # Examples
	///
	/// ```
	/// use formcraft_forms::{Form, FormOptions, SessionToken};
	/// use formcraft_urls::UrlReverser;
	///
	/// let form = Form::builder()
	///     .urls(UrlReverser::new().with_current("/search"))
	///     .tokens(SessionToken::new("t"))
	///     .build()
	///     .unwrap();
	///
	/// let html = form.open(&FormOptions::builder().method("get").build()).unwrap();
	/// assert_eq!(html, r#"<form method="GET" action="/search" accept-charset="UTF-8">"#);
	/// ```
	pub fn open(&self, options: &FormOptions) -> FormResult<String> {
		let mut markup = self.open_tag(options)?;
		markup.extend(self.appendage(options.method()));
		Ok(markup.render(self.renderer.as_ref()))
	}

	/// Bind `model` and open the form
	pub fn open_for_model(&mut self, model: Value, options: &FormOptions) -> FormResult<String> {
		self.model = Some(model);
		self.open(options)
	}

	pub fn close(&self) -> String {
		"</form>".to_string()
	}

	/// Standalone anti-forgery field
	pub fn token(&self) -> String {
		self.renderer.input(
			"hidden",
			TOKEN_FIELD,
			Some(&self.tokens.token()),
			&Attributes::new(),
		)
	}

	/// `<form ...>` with the resolved action, or without method and action
	/// in reactive mode
	pub(crate) fn open_tag(&self, options: &FormOptions) -> FormResult<Markup> {
		let action = if self.reactive {
			None
		} else {
			Some(resolve_action(options, self.urls.as_ref())?)
		};

		let method = options.method();
		tracing::debug!(
			method = %method,
			spoofed = method.is_spoofed(),
			reactive = self.reactive,
			"opening form"
		);

		let mut markup = Markup::new();
		markup.push(Fragment::open("form", options.tag_attributes(action)));
		Ok(markup)
	}

	/// `_method` then `_token`, as required by `method`
	pub(crate) fn appendage(&self, method: &Method) -> Markup {
		let mut markup = Markup::new();
		if self.reactive {
			return markup;
		}
		if method.is_spoofed() {
			markup.push(Fragment::hidden(METHOD_FIELD, method.as_str()));
		}
		if method.needs_token() {
			markup.push(Fragment::hidden(TOKEN_FIELD, self.tokens.token()));
		}
		markup
	}

	pub(crate) fn payload_fragments(&self) -> impl Iterator<Item = Fragment> + '_ {
		self.payload
			.iter()
			.map(|(name, value)| Fragment::hidden(name.as_str(), value.as_str()))
	}

	/// Single-button form fragments: tag, payload, appendage, button, close
	pub(crate) fn action_markup(
		&self,
		options: &FormOptions,
		label: &str,
		button_class: &str,
		extra: &Attributes,
	) -> FormResult<Markup> {
		let mut attrs = Attributes::new().with("class", button_class);
		attrs.merge(extra.clone());
		if let Some(confirm) = &self.confirm {
			attrs.insert("onclick", confirm.onclick());
		}
		attrs.insert("type", "submit");

		let mut markup = self.open_tag(options)?;
		markup
			.extend(self.payload_fragments())
			.extend(self.appendage(options.method()))
			.push(Fragment::button(label, attrs))
			.push(Fragment::Close("form"));
		Ok(markup)
	}

	/// Build a single-button form
	///
	/// The form gets the configured inline class, the button the configured
	/// submit class unless `button.attrs` overrides it. With
	/// `button.as_modal` the result is the modal-wrapped form only.
	pub fn action(
		mut self,
		method: impl Into<Method>,
		target: impl IntoTargetSpec,
		button: ActionButton,
	) -> FormResult<Self> {
		let options = FormOptions::builder()
			.method(method)
			.target(Target::Route(target.into_target_spec()))
			.class(self.config.inline_form_class.clone())
			.build();

		self.html = self.render_action(&options, &button)?;
		Ok(self)
	}

	/// Same as [`Form::action`] with an explicit target variant
	pub fn action_to(
		mut self,
		method: impl Into<Method>,
		target: Target,
		button: ActionButton,
	) -> FormResult<Self> {
		let options = FormOptions::builder()
			.method(method)
			.target(target)
			.class(self.config.inline_form_class.clone())
			.build();

		self.html = self.render_action(&options, &button)?;
		Ok(self)
	}

	pub(crate) fn render_action(
		&self,
		options: &FormOptions,
		button: &ActionButton,
	) -> FormResult<String> {
		let markup = self.action_markup(
			options,
			&button.label,
			&self.config.submit_class,
			&button.attrs,
		)?;
		let html = markup.render(self.renderer.as_ref());
		tracing::debug!(form_id = self.form_id(), as_modal = button.as_modal, "built action form");

		if button.as_modal {
			Ok(self.wrap_modal(&html, None, None, None))
		} else {
			Ok(html)
		}
	}

	/// Wrap the assembled markup in a modal dialog
	///
	/// Values set with [`Form::set_modal`] win over the arguments.
	pub fn as_modal(
		&self,
		trigger_label: Option<&str>,
		trigger_class: Option<&str>,
		message: Option<&str>,
	) -> String {
		self.wrap_modal(&self.html, trigger_label, trigger_class, message)
	}

	fn wrap_modal(
		&self,
		inner: &str,
		trigger_label: Option<&str>,
		trigger_class: Option<&str>,
		message: Option<&str>,
	) -> String {
		let values = &self.modal;
		let spec = ModalSpec {
			title: values
				.title
				.clone()
				.unwrap_or_else(|| modal::DEFAULT_MODAL_TITLE.to_string()),
			message: values
				.message
				.clone()
				.or_else(|| message.map(str::to_string)),
			trigger_label: values
				.trigger_label
				.clone()
				.or_else(|| trigger_label.map(str::to_string))
				.unwrap_or_default(),
			trigger_class: values
				.trigger_class
				.clone()
				.or_else(|| trigger_class.map(str::to_string)),
		};
		modal::wrap(inner, &self.modal_id(), &spec, self.renderer.as_ref())
	}
}

impl fmt::Display for Form {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.html)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::csrf::SessionToken;
	use formcraft_urls::UrlReverser;
	use rstest::{fixture, rstest};

	#[fixture]
	fn form() -> Form {
		let mut urls = UrlReverser::new().with_current("/current");
		urls.register_path("posts.update", "/posts/{post}");
		Form::builder()
			.urls(urls)
			.tokens(SessionToken::new("tok"))
			.form_id("f1")
			.build()
			.unwrap()
	}

	#[rstest]
	fn test_missing_urls_is_reported() {
		let err = Form::builder()
			.tokens(SessionToken::new("t"))
			.build()
			.unwrap_err();
		assert!(matches!(err, FormError::MissingCapability("url resolver")));
	}

	#[rstest]
	fn test_missing_tokens_is_reported() {
		let err = Form::builder().urls(UrlReverser::new()).build().unwrap_err();
		assert!(matches!(err, FormError::MissingCapability("token source")));
	}

	#[rstest]
	fn test_generated_id_is_stable() {
		let form = Form::builder()
			.urls(UrlReverser::new())
			.tokens(SessionToken::new("t"))
			.build()
			.unwrap();

		assert_eq!(form.form_id().len(), FORM_ID_LENGTH);
		assert_eq!(form.form_id(), form.form_id());
		assert_eq!(form.modal_id(), format!("{}_Modal", form.form_id()));
	}

	#[rstest]
	fn test_open_put_has_method_then_token(form: Form) {
		let options = FormOptions::builder()
			.method("put")
			.route(("posts.update", ["3"]))
			.build();

		assert_eq!(
			form.open(&options).unwrap(),
			concat!(
				r#"<form method="POST" action="/posts/3" accept-charset="UTF-8">"#,
				r#"<input type="hidden" name="_method" value="PUT">"#,
				r#"<input type="hidden" name="_token" value="tok">"#
			)
		);
	}

	#[rstest]
	fn test_reactive_open_has_no_method_action_or_appendage(form: Form) {
		let options = FormOptions::builder().method("delete").files(true).build();
		let html = form.reactive(true).open(&options).unwrap();

		assert_eq!(
			html,
			r#"<form accept-charset="UTF-8" enctype="multipart/form-data">"#
		);
	}

	#[rstest]
	fn test_token_field(form: Form) {
		assert_eq!(form.token(), r#"<input type="hidden" name="_token" value="tok">"#);
		assert_eq!(form.close(), "</form>");
	}

	#[rstest]
	fn test_action_default_button(form: Form) {
		let html = form
			.action_to("post", Target::url("/x"), ActionButton::default())
			.unwrap()
			.to_string();

		assert!(html.contains(r#"<button class="btn btn-primary" type="submit">Send</button></form>"#));
	}

	#[rstest]
	fn test_action_resolution_error_leaves_no_markup(form: Form) {
		let result = form.action("post", "posts.update", ActionButton::default());
		assert!(matches!(result, Err(FormError::UnresolvableTarget(_))));
	}

	#[rstest]
	fn test_action_button_attrs_override_class(form: Form) {
		let button = ActionButton::new("Go").attr("class", "btn-link").attr("id", "go");
		let html = form
			.action_to("post", Target::url("/x"), button)
			.unwrap()
			.to_string();

		assert!(html.contains(r#"<button class="btn-link" id="go" type="submit">Go</button>"#));
		assert!(html.starts_with(r#"<form method="POST" action="/x" accept-charset="UTF-8" class="form d-inline">"#));
	}

	#[rstest]
	fn test_confirm_handler_replaces_native_dialog(form: Form) {
		let html = form
			.confirm("Sure?")
			.confirm_with("It's final", "askUser")
			.action_to("delete", Target::url("/x"), ActionButton::default())
			.unwrap()
			.to_string();

		assert!(html.contains(r#"onclick="askUser(event, 'It\'s final')""#));
		assert!(!html.contains("return confirm"));
	}

	#[rstest]
	#[case(ConfirmSpec::new("Sure?"), "if (!confirm('Sure?')) return false;")]
	#[case(ConfirmSpec::with_handler("Sure?", "askUser"), "if (!askUser(event, 'Sure?')) return false;")]
	fn test_confirm_guard(#[case] confirm: ConfirmSpec, #[case] expected: &str) {
		assert_eq!(confirm.guard(), expected);
	}

	#[rstest]
	fn test_instance_modal_values_win(form: Form) {
		let form = form
			.set_modal("Mine", Some("btn-mine".to_string()), "Instance message")
			.modal_title("Really");
		let html = form.as_modal(Some("Arg"), Some("btn-arg"), Some("Arg message"));

		assert!(html.contains(">Mine</button>"));
		assert!(html.contains(r#"class="btn-mine""#));
		assert!(html.contains("Instance message"));
		assert!(html.contains(r#"<h5 class="modal-title">Really</h5>"#));
		assert!(!html.contains("Arg"));
	}

	#[rstest]
	fn test_modal_arguments_used_when_instance_unset(form: Form) {
		let html = form.as_modal(Some("Open"), None, Some("Hello"));
		assert!(html.contains("Hello"));
		assert!(html.contains(r#"<button onclick="$('#f1_Modal').modal('show')">Open</button>"#));
	}

	#[rstest]
	fn test_model_binding(mut form: Form) {
		let html = form
			.open_for_model(serde_json::json!({"title": "Hi"}), &FormOptions::default())
			.unwrap();

		assert!(html.contains(r#"action="/current""#));
		assert_eq!(form.model_value("title"), Some(&serde_json::json!("Hi")));
		assert_eq!(form.model_value("missing"), None);
	}
}
