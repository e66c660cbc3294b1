//! Immutable form options and their builder

use crate::attributes::Attributes;
use indexmap::IndexMap;
use std::fmt;

/// HTTP method requested by the caller, normalized to uppercase
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Method {
	Get,
	#[default]
	Post,
	Put,
	Patch,
	Delete,
	/// Any other verb, stored uppercase
	Other(String),
}

impl Method {
	/// Parse case-insensitively
	///
	/// # Examples
	///
	/// ```
	/// use formcraft_forms::Method;
	///
	/// assert_eq!(Method::parse("delete"), Method::Delete);
	/// assert_eq!(Method::parse("purge"), Method::Other("PURGE".to_string()));
	/// ```
	pub fn parse(method: &str) -> Self {
		match method.trim().to_ascii_uppercase().as_str() {
			"GET" => Method::Get,
			"POST" => Method::Post,
			"PUT" => Method::Put,
			"PATCH" => Method::Patch,
			"DELETE" => Method::Delete,
			other => Method::Other(other.to_string()),
		}
	}

	pub fn as_str(&self) -> &str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Put => "PUT",
			Method::Patch => "PATCH",
			Method::Delete => "DELETE",
			Method::Other(other) => other,
		}
	}

	/// Whether the verb travels as POST with a hidden override field
	pub fn is_spoofed(&self) -> bool {
		matches!(self, Method::Put | Method::Patch | Method::Delete)
	}

	/// Method sent on the wire: GET stays GET, everything else is POST
	pub fn transport(&self) -> &'static str {
		match self {
			Method::Get => "GET",
			_ => "POST",
		}
	}

	/// Whether an anti-forgery field accompanies the form
	pub fn needs_token(&self) -> bool {
		!matches!(self, Method::Get)
	}
}

impl From<&str> for Method {
	fn from(method: &str) -> Self {
		Method::parse(method)
	}
}

impl From<String> for Method {
	fn from(method: String) -> Self {
		Method::parse(&method)
	}
}

impl fmt::Display for Method {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A name (path, route or action) plus positional parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
	pub name: String,
	pub params: Vec<String>,
}

impl TargetSpec {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			params: Vec::new(),
		}
	}

	pub fn param(mut self, value: impl ToString) -> Self {
		self.params.push(value.to_string());
		self
	}

	/// First element is the name, the rest are parameters. `None` if empty.
	pub fn from_parts<I, S>(parts: I) -> Option<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut parts = parts.into_iter().map(Into::into);
		let name = parts.next()?;
		Some(Self {
			name,
			params: parts.collect(),
		})
	}
}

impl From<&str> for TargetSpec {
	fn from(name: &str) -> Self {
		TargetSpec::new(name)
	}
}

impl From<String> for TargetSpec {
	fn from(name: String) -> Self {
		TargetSpec::new(name)
	}
}

/// Where the form submits to
///
/// Plain strings convert to a route target, the common case for action forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
	Url(TargetSpec),
	Route(TargetSpec),
	Action(TargetSpec),
}

impl Target {
	pub fn url(spec: impl Into<TargetSpec>) -> Self {
		Target::Url(spec.into())
	}

	pub fn route(spec: impl Into<TargetSpec>) -> Self {
		Target::Route(spec.into())
	}

	pub fn action(spec: impl Into<TargetSpec>) -> Self {
		Target::Action(spec.into())
	}

	/// Lower value wins when several targets are offered
	fn precedence(&self) -> u8 {
		match self {
			Target::Url(_) => 0,
			Target::Route(_) => 1,
			Target::Action(_) => 2,
		}
	}

	pub fn spec(&self) -> &TargetSpec {
		match self {
			Target::Url(spec) | Target::Route(spec) | Target::Action(spec) => spec,
		}
	}
}

impl From<&str> for Target {
	fn from(name: &str) -> Self {
		Target::Route(TargetSpec::new(name))
	}
}

impl From<String> for Target {
	fn from(name: String) -> Self {
		Target::Route(TargetSpec::new(name))
	}
}

impl From<TargetSpec> for Target {
	fn from(spec: TargetSpec) -> Self {
		Target::Route(spec)
	}
}

/// Options of one form tag, fixed once built
///
/// # Examples
///
/// ```
/// use formcraft_forms::{FormOptions, Method, Target};
///
/// let options = FormOptions::builder()
///     .method("patch")
///     .route(("posts.update", ["12"]))
///     .files(true)
///     .build();
///
/// assert_eq!(options.method(), &Method::Patch);
/// assert!(matches!(options.target(), Some(Target::Route(_))));
/// assert!(options.files());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormOptions {
	method: Method,
	target: Option<Target>,
	class: Option<String>,
	files: bool,
	attributes: IndexMap<String, String>,
}

impl FormOptions {
	pub fn builder() -> FormOptionsBuilder {
		FormOptionsBuilder::default()
	}

	pub fn method(&self) -> &Method {
		&self.method
	}

	pub fn target(&self) -> Option<&Target> {
		self.target.as_ref()
	}

	pub fn class(&self) -> Option<&str> {
		self.class.as_deref()
	}

	pub fn files(&self) -> bool {
		self.files
	}

	pub fn attributes(&self) -> &IndexMap<String, String> {
		&self.attributes
	}

	/// Copy of these options with a different class
	pub fn with_class(&self, class: impl Into<String>) -> Self {
		let mut options = self.clone();
		options.class = Some(class.into());
		options
	}

	/// Copy of these options with the files flag forced
	pub fn with_files(&self, files: bool) -> Self {
		let mut options = self.clone();
		options.files = files;
		options
	}

	/// Copy of these options with `name` added unless already present
	pub fn with_default_attr(&self, name: &str, value: &str) -> Self {
		let mut options = self.clone();
		options
			.attributes
			.entry(name.to_string())
			.or_insert_with(|| value.to_string());
		options
	}

	/// Attributes of the opening tag, in emission order
	///
	/// `method` and `action` are left out in reactive mode and are never taken
	/// from the extra attributes. `enctype` always comes last.
	pub(crate) fn tag_attributes(&self, action: Option<String>) -> Attributes {
		let mut attrs = Attributes::new();
		if let Some(action) = action {
			attrs.insert("method", self.method.transport());
			attrs.insert("action", action);
		}
		attrs.insert("accept-charset", "UTF-8");
		if let Some(class) = &self.class {
			attrs.insert("class", class.as_str());
		}
		for (name, value) in &self.attributes {
			if !RESERVED_ATTRIBUTES.contains(&name.as_str()) {
				attrs.insert(name.as_str(), value.as_str());
			}
		}
		if self.files {
			attrs.insert("enctype", "multipart/form-data");
		} else if let Some(enctype) = self.attributes.get("enctype") {
			attrs.insert("enctype", enctype.as_str());
		}
		attrs
	}
}

/// Extra attributes that only the options themselves may set
const RESERVED_ATTRIBUTES: [&str; 3] = ["method", "action", "enctype"];

/// Builder for [`FormOptions`]
#[derive(Debug, Clone, Default)]
pub struct FormOptionsBuilder {
	options: FormOptions,
}

/// Conversion of the common `(name, params)` shorthands into a [`TargetSpec`]
pub trait IntoTargetSpec {
	fn into_target_spec(self) -> TargetSpec;
}

impl IntoTargetSpec for TargetSpec {
	fn into_target_spec(self) -> TargetSpec {
		self
	}
}

impl IntoTargetSpec for &str {
	fn into_target_spec(self) -> TargetSpec {
		TargetSpec::new(self)
	}
}

impl IntoTargetSpec for String {
	fn into_target_spec(self) -> TargetSpec {
		TargetSpec::new(self)
	}
}

impl<N, P, const LEN: usize> IntoTargetSpec for (N, [P; LEN])
where
	N: Into<String>,
	P: ToString,
{
	fn into_target_spec(self) -> TargetSpec {
		TargetSpec {
			name: self.0.into(),
			params: self.1.iter().map(ToString::to_string).collect(),
		}
	}
}

impl<N, P> IntoTargetSpec for (N, Vec<P>)
where
	N: Into<String>,
	P: ToString,
{
	fn into_target_spec(self) -> TargetSpec {
		TargetSpec {
			name: self.0.into(),
			params: self.1.iter().map(ToString::to_string).collect(),
		}
	}
}

impl FormOptionsBuilder {
	pub fn method(mut self, method: impl Into<Method>) -> Self {
		self.options.method = method.into();
		self
	}

	/// Offer a target; a higher-precedence target already set is kept
	pub fn target(mut self, target: Target) -> Self {
		let replace = self
			.options
			.target
			.as_ref()
			.is_none_or(|current| target.precedence() <= current.precedence());
		if replace {
			self.options.target = Some(target);
		}
		self
	}

	pub fn url(self, spec: impl IntoTargetSpec) -> Self {
		self.target(Target::Url(spec.into_target_spec()))
	}

	pub fn route(self, spec: impl IntoTargetSpec) -> Self {
		self.target(Target::Route(spec.into_target_spec()))
	}

	pub fn action(self, spec: impl IntoTargetSpec) -> Self {
		self.target(Target::Action(spec.into_target_spec()))
	}

	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.options.class = Some(class.into());
		self
	}

	pub fn files(mut self, files: bool) -> Self {
		self.options.files = files;
		self
	}

	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.options.attributes.insert(name.into(), value.into());
		self
	}

	pub fn attributes(mut self, attributes: IndexMap<String, String>) -> Self {
		self.options.attributes.extend(attributes);
		self
	}

	pub fn build(self) -> FormOptions {
		self.options
	}
}
