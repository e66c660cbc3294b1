//! Configuration sources
//!
//! File-backed sources producing a JSON value tree. A missing file is not an
//! error: it yields an empty object so hosts can ship without a settings file.

use crate::ConfResult;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> ConfResult<Value>;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Error type for configuration sources
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Parse error: {0}")]
	Parse(String),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

/// Parse TOML text into a JSON value tree
pub(crate) fn toml_to_value(content: &str) -> ConfResult<Value> {
	let toml_value: toml::Value = toml::from_str(content)?;
	let value = serde_json::to_value(toml_value)?;
	expect_object(value)
}

/// Parse JSON text into a JSON value tree
pub(crate) fn json_to_value(content: &str) -> ConfResult<Value> {
	let value: Value = serde_json::from_str(content)?;
	expect_object(value)
}

fn expect_object(value: Value) -> ConfResult<Value> {
	if value.is_object() {
		Ok(value)
	} else {
		Err(SourceError::Parse("Expected object at root".to_string()))
	}
}

/// TOML file configuration source
pub struct TomlFileSource {
	path: PathBuf,
}

impl TomlFileSource {
	/// Create a new TOML file configuration source
	///
	/// # Examples
	///
	/// ```
	/// use formcraft_conf::TomlFileSource;
	/// use std::path::PathBuf;
	///
	/// let source = TomlFileSource::new(PathBuf::from("forms.toml"));
	/// ```
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> ConfResult<Value> {
		if !self.path.exists() {
			tracing::debug!(path = %self.path.display(), "settings file not found, using defaults");
			return Ok(Value::Object(Default::default()));
		}

		let content = fs::read_to_string(&self.path)?;
		toml_to_value(&content)
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// JSON file configuration source
pub struct JsonFileSource {
	path: PathBuf,
}

impl JsonFileSource {
	/// Create a new JSON file configuration source
	///
	/// # Examples
	///
	/// ```
	/// use formcraft_conf::JsonFileSource;
	///
	/// let source = JsonFileSource::new("forms.json");
	/// ```
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for JsonFileSource {
	fn load(&self) -> ConfResult<Value> {
		if !self.path.exists() {
			tracing::debug!(path = %self.path.display(), "settings file not found, using defaults");
			return Ok(Value::Object(Default::default()));
		}

		let content = fs::read_to_string(&self.path)?;
		json_to_value(&content)
	}

	fn description(&self) -> String {
		format!("JSON file: {}", self.path.display())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn test_missing_toml_file_is_empty() {
		let source = TomlFileSource::new("/nonexistent/forms.toml");
		let value = source.load().unwrap();
		assert_eq!(value, serde_json::json!({}));
	}

	#[rstest]
	fn test_toml_file_is_loaded() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[forms.form]\nclass = \"stacked\"").unwrap();

		let source = TomlFileSource::new(file.path());
		let value = source.load().unwrap();
		assert_eq!(value["forms"]["form"]["class"], "stacked");
		assert!(source.description().starts_with("TOML file: "));
	}

	#[rstest]
	fn test_json_file_is_loaded() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, r#"{{"forms": {{"buttons": {{"submit": "go"}}}}}}"#).unwrap();

		let source = JsonFileSource::new(file.path());
		let value = source.load().unwrap();
		assert_eq!(value["forms"]["buttons"]["submit"], "go");
	}

	#[rstest]
	fn test_json_root_must_be_object() {
		let result = json_to_value("[1, 2, 3]");
		assert!(matches!(result, Err(SourceError::Parse(_))));
	}

	#[rstest]
	fn test_invalid_toml_is_reported() {
		let result = toml_to_value("forms = [");
		assert!(matches!(result, Err(SourceError::Toml(_))));
	}
}
