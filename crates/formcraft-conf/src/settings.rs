//! Hierarchical settings navigated by dotted path

use crate::ConfResult;
use crate::lookup::ConfigLookup;
use crate::sources::{ConfigSource, json_to_value, toml_to_value};
use serde_json::Value;

/// Settings tree loaded from TOML or JSON.
///
/// Nested tables are addressed with dotted paths. Keys may themselves contain
/// dashes (`forms.form.inline-class`), never dots.
///
/// # Examples
///
/// ```
/// use formcraft_conf::{ConfigLookup, Settings};
///
/// let settings = Settings::from_json_str(r#"{"forms": {"form": {"class": "stacked"}}}"#).unwrap();
/// assert_eq!(settings.get("forms.form.class"), Some("stacked".to_string()));
/// assert_eq!(settings.get("forms.form"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
	root: Value,
}

impl Settings {
	/// Create empty settings
	pub fn new() -> Self {
		Self {
			root: Value::Object(Default::default()),
		}
	}

	/// Wrap an already-parsed value tree
	pub fn from_value(root: Value) -> Self {
		Self { root }
	}

	/// Parse settings from TOML text
	pub fn from_toml_str(content: &str) -> ConfResult<Self> {
		Ok(Self::from_value(toml_to_value(content)?))
	}

	/// Parse settings from JSON text
	pub fn from_json_str(content: &str) -> ConfResult<Self> {
		Ok(Self::from_value(json_to_value(content)?))
	}

	/// Load settings from one source
	pub fn from_source(source: &dyn ConfigSource) -> ConfResult<Self> {
		tracing::debug!(source = %source.description(), "loading form settings");
		Ok(Self::from_value(source.load()?))
	}

	/// Load settings from several sources, later sources overriding earlier ones
	///
	/// # Examples
	///
	/// ```
	/// use formcraft_conf::{ConfigLookup, Settings, TomlFileSource};
	///
	/// let settings = Settings::layered(&[
	///     &TomlFileSource::new("/nonexistent/defaults.toml"),
	///     &TomlFileSource::new("/nonexistent/local.toml"),
	/// ]).unwrap();
	/// assert_eq!(settings.get("forms.form.class"), None);
	/// ```
	pub fn layered(sources: &[&dyn ConfigSource]) -> ConfResult<Self> {
		let mut settings = Self::new();
		for source in sources {
			let layer = Self::from_source(*source)?;
			settings.merge(layer);
		}
		Ok(settings)
	}

	/// Deep-merge `other` on top of these settings
	pub fn merge(&mut self, other: Settings) {
		merge_values(&mut self.root, other.root);
	}

	/// The raw value at a dotted path
	pub fn value(&self, path: &str) -> Option<&Value> {
		path.split('.')
			.try_fold(&self.root, |node, segment| node.get(segment))
	}

	/// The raw value tree
	pub fn as_value(&self) -> &Value {
		&self.root
	}
}

impl Default for Settings {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigLookup for Settings {
	fn get(&self, path: &str) -> Option<String> {
		match self.value(path)? {
			Value::String(s) => Some(s.clone()),
			Value::Number(n) => Some(n.to_string()),
			Value::Bool(b) => Some(b.to_string()),
			_ => None,
		}
	}
}

fn merge_values(base: &mut Value, overlay: Value) {
	match (base, overlay) {
		(Value::Object(base_map), Value::Object(overlay_map)) => {
			for (key, value) in overlay_map {
				match base_map.get_mut(&key) {
					Some(existing) => merge_values(existing, value),
					None => {
						base_map.insert(key, value);
					}
				}
			}
		}
		(base, overlay) => *base = overlay,
	}
}
