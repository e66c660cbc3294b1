//! HTML attribute serialization
//!
//! [`Attributes`] is an insertion-ordered bag of attribute values. Serializing
//! it is deterministic: attributes come out in the order they went in, which
//! keeps rendered markup stable for snapshot tests.

use indexmap::IndexMap;
use std::fmt;

/// Value of a single HTML attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
	/// `name="value"`
	Text(String),
	/// `true` renders the bare attribute name, `false` drops it
	Flag(bool),
	/// Dropped from the output
	Absent,
}

impl AttrValue {
	pub fn as_text(&self) -> Option<&str> {
		match self {
			AttrValue::Text(s) => Some(s),
			_ => None,
		}
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::Text(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Text(value)
	}
}

impl From<&String> for AttrValue {
	fn from(value: &String) -> Self {
		AttrValue::Text(value.clone())
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		AttrValue::Flag(value)
	}
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(AttrValue::Absent, Into::into)
	}
}

/// Ordered attribute bag
///
/// # Examples
///
/// ```
/// use formcraft_forms::Attributes;
///
/// let attrs = Attributes::new()
///     .with("class", "btn")
///     .with("disabled", true)
///     .with("title", None::<&str>);
///
/// assert_eq!(attrs.to_html(), r#" class="btn" disabled"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
	entries: IndexMap<String, AttrValue>,
}

impl Attributes {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insert
	pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.insert(name, value);
		self
	}

	/// Insert or replace an attribute. A replaced attribute keeps its position.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
		self.entries.insert(name.into(), value.into());
	}

	/// Insert only when the attribute is not present yet
	pub fn insert_default(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
		self.entries.entry(name.into()).or_insert_with(|| value.into());
	}

	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.entries.get(name)
	}

	/// Text value of an attribute, if it has one
	pub fn text(&self, name: &str) -> Option<&str> {
		self.get(name).and_then(AttrValue::as_text)
	}

	pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
		self.entries.shift_remove(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Overlay `other`: its values win, positions of existing keys are kept
	pub fn merge(&mut self, other: Attributes) {
		for (name, value) in other.entries {
			self.entries.insert(name, value);
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Serialize to an attribute string; every emitted attribute is prefixed
	/// with a single space so the result can follow a tag name directly.
	pub fn to_html(&self) -> String {
		serialize(self)
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attrs = Attributes::new();
		for (name, value) in iter {
			attrs.insert(name, value);
		}
		attrs
	}
}

impl From<IndexMap<String, String>> for Attributes {
	fn from(map: IndexMap<String, String>) -> Self {
		map.into_iter().collect()
	}
}

impl fmt::Display for Attributes {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_html())
	}
}

/// Serialize attributes into a string suitable for an opening tag
///
/// Absent values and `false` flags are omitted, `true` flags render as the
/// bare name, text values are escaped for double-quoted embedding.
pub fn serialize(attrs: &Attributes) -> String {
	let mut html = String::new();
	for (name, value) in attrs.iter() {
		match value {
			AttrValue::Text(text) => {
				html.push(' ');
				html.push_str(name);
				html.push_str("=\"");
				html.push_str(&escape_attr(text));
				html.push('"');
			}
			AttrValue::Flag(true) => {
				html.push(' ');
				html.push_str(name);
			}
			AttrValue::Flag(false) | AttrValue::Absent => {}
		}
	}
	html
}

/// Escape a value for a double-quoted HTML attribute
///
/// Single quotes are legal inside double-quoted attributes and are kept, so
/// inline handlers such as `return confirm('...')` survive unchanged.
///
/// # Examples
///
/// ```
/// use formcraft_forms::attributes::escape_attr;
///
/// assert_eq!(escape_attr(r#"a "b" & <c>"#), "a &quot;b&quot; &amp; &lt;c&gt;");
/// assert_eq!(escape_attr("return confirm('ok')"), "return confirm('ok')");
/// ```
pub fn escape_attr(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\n', "&#10;")
		.replace('\r', "&#13;")
}

/// Escape HTML special characters in text content
pub fn escape_html(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

/// Escape a value for a single-quoted JavaScript string literal
///
/// # Examples
///
/// ```
/// use formcraft_forms::attributes::escape_javascript;
///
/// assert_eq!(escape_javascript("it's"), "it\\'s");
/// assert_eq!(escape_javascript("Are you sure?"), "Are you sure?");
/// ```
pub fn escape_javascript(input: &str) -> String {
	input
		.replace('\\', "\\\\")
		.replace('\'', "\\'")
		.replace('"', "\\\"")
		.replace('\n', "\\n")
		.replace('\r', "\\r")
		.replace('\t', "\\t")
		.replace('<', "\\x3C")
		.replace('>', "\\x3E")
}
