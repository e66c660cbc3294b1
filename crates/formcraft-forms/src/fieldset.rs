//! Declarative field lists and their normalization

use crate::error::{FormError, FormResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_field_type() -> String {
	"text".to_string()
}

/// Rendering configuration of one field
///
/// Keys other than `type`, `label` and `attributes` are kept in `extra` and
/// handed to the field renderer untouched.
///
/// # Examples
///
/// ```
/// use formcraft_forms::FieldConfig;
///
/// let config: FieldConfig = serde_json::from_str(
///     r#"{"type": "email", "attributes": {"placeholder": "you@example.com"}, "custom": {"size": 3}}"#,
/// ).unwrap();
///
/// assert_eq!(config.field_type, "email");
/// assert_eq!(config.attributes["placeholder"], "you@example.com");
/// assert!(config.extra.contains_key("custom"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
	#[serde(rename = "type", default = "default_field_type")]
	pub field_type: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	#[serde(default)]
	pub attributes: IndexMap<String, String>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl FieldConfig {
	pub fn new(field_type: impl Into<String>) -> Self {
		Self {
			field_type: field_type.into(),
			label: None,
			attributes: IndexMap::new(),
			extra: Map::new(),
		}
	}

	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.insert(name.into(), value.into());
		self
	}

	pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
		self.extra.insert(key.into(), value);
		self
	}

	pub fn is_disabled(&self) -> bool {
		self.attributes.get("disabled").is_some_and(|v| v == "disabled")
	}
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self::new(default_field_type())
	}
}

/// Normalized field mapping, in declaration order
pub type FieldSet = IndexMap<String, FieldConfig>;

/// One element of a declarative field list: `{name: config}`
pub type FieldEntry = IndexMap<String, FieldConfig>;

/// Expand a declarative field list into a [`FieldSet`]
///
/// Every entry must name exactly one field. With `disabled` set, each field
/// gets `attributes.disabled = "disabled"` here, so the parsed mapping is
/// final and re-parsing is idempotent.
///
/// # Examples
///
/// ```
/// use formcraft_forms::{FieldConfig, parse_fields};
/// use indexmap::IndexMap;
///
/// let list = vec![
///     IndexMap::from([("name".to_string(), FieldConfig::new("text"))]),
///     IndexMap::from([("email".to_string(), FieldConfig::new("email"))]),
/// ];
///
/// let fields = parse_fields(list, true).unwrap();
/// assert_eq!(fields.keys().collect::<Vec<_>>(), ["name", "email"]);
/// assert!(fields.values().all(FieldConfig::is_disabled));
/// ```
pub fn parse_fields(list: Vec<FieldEntry>, disabled: bool) -> FormResult<FieldSet> {
	if list.is_empty() {
		return Err(FormError::InvalidFieldSet("field list is empty".to_string()));
	}

	let mut fields = FieldSet::with_capacity(list.len());
	for (index, entry) in list.into_iter().enumerate() {
		if entry.len() != 1 {
			return Err(FormError::InvalidFieldSet(format!(
				"entry {} must name exactly one field, found {}",
				index,
				entry.len()
			)));
		}
		for (name, mut config) in entry {
			if disabled {
				config
					.attributes
					.insert("disabled".to_string(), "disabled".to_string());
			}
			fields.insert(name, config);
		}
	}

	tracing::debug!(count = fields.len(), disabled, "parsed field set");
	Ok(fields)
}

/// Parse a field list given as JSON: `[{"name": {...}}, ...]`
pub fn parse_fields_value(value: Value, disabled: bool) -> FormResult<FieldSet> {
	let list: Vec<FieldEntry> = serde_json::from_value(value)
		.map_err(|e| FormError::InvalidFieldSet(e.to_string()))?;
	parse_fields(list, disabled)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn entry(name: &str, config: FieldConfig) -> FieldEntry {
		IndexMap::from([(name.to_string(), config)])
	}

	#[rstest]
	fn test_empty_list_is_rejected() {
		let err = parse_fields(Vec::new(), false).unwrap_err();
		assert!(matches!(err, FormError::InvalidFieldSet(_)));
	}

	#[rstest]
	#[case(0)]
	#[case(2)]
	fn test_entry_must_name_one_field(#[case] names: usize) {
		let mut bad = FieldEntry::new();
		for i in 0..names {
			bad.insert(format!("f{}", i), FieldConfig::default());
		}
		let list = vec![entry("ok", FieldConfig::default()), bad];

		let err = parse_fields(list, false).unwrap_err();
		assert!(err.to_string().contains("entry 1"));
	}

	#[rstest]
	fn test_enabled_parse_leaves_attributes_alone() {
		let list = vec![entry("title", FieldConfig::new("text").attr("maxlength", "80"))];
		let fields = parse_fields(list, false).unwrap();

		assert!(!fields["title"].is_disabled());
		assert_eq!(fields["title"].attributes.len(), 1);
	}

	#[rstest]
	fn test_disabled_overrides_existing_value() {
		let list = vec![entry("title", FieldConfig::new("text").attr("disabled", "false"))];
		let fields = parse_fields(list, true).unwrap();

		assert_eq!(fields["title"].attributes["disabled"], "disabled");
	}

	#[rstest]
	fn test_parse_from_json_value() {
		let fields = parse_fields_value(
			json!([
				{"body": {"type": "textarea", "label": "Body"}},
				{"published": {"type": "checkbox"}}
			]),
			false,
		)
		.unwrap();

		assert_eq!(fields["body"].field_type, "textarea");
		assert_eq!(fields["body"].label.as_deref(), Some("Body"));
		assert_eq!(fields.get_index(1).map(|(k, _)| k.as_str()), Some("published"));
	}

	#[rstest]
	fn test_malformed_json_is_invalid_field_set() {
		let err = parse_fields_value(json!({"not": "a list"}), false).unwrap_err();
		assert!(matches!(err, FormError::InvalidFieldSet(_)));
	}
}
