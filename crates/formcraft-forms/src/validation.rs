//! Validation error bag handed to field rendering

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Error messages keyed by field name, in insertion order
///
/// # Examples
///
/// ```
/// use formcraft_forms::ValidationErrors;
///
/// let mut errors = ValidationErrors::new();
/// errors.add("email", "The email field is required.");
/// errors.add("email", "The email must be valid.");
///
/// assert!(errors.has("email"));
/// assert_eq!(errors.first("email"), Some("The email field is required."));
/// assert_eq!(errors.get("email").len(), 2);
/// assert!(errors.get("name").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
	messages: IndexMap<String, Vec<String>>,
}

impl ValidationErrors {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
		self.messages
			.entry(field.into())
			.or_default()
			.push(message.into());
		self
	}

	/// Messages for `field`; empty when it has none
	pub fn get(&self, field: &str) -> &[String] {
		self.messages.get(field).map(Vec::as_slice).unwrap_or(&[])
	}

	pub fn first(&self, field: &str) -> Option<&str> {
		self.get(field).first().map(String::as_str)
	}

	pub fn has(&self, field: &str) -> bool {
		!self.get(field).is_empty()
	}

	pub fn is_empty(&self) -> bool {
		self.messages.values().all(Vec::is_empty)
	}

	/// Number of fields with at least one message
	pub fn len(&self) -> usize {
		self.messages.values().filter(|m| !m.is_empty()).count()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.messages
			.iter()
			.map(|(field, messages)| (field.as_str(), messages.as_slice()))
	}
}

impl<F, M> FromIterator<(F, M)> for ValidationErrors
where
	F: Into<String>,
	M: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (F, M)>>(iter: I) -> Self {
		let mut errors = ValidationErrors::new();
		for (field, message) in iter {
			errors.add(field, message);
		}
		errors
	}
}
