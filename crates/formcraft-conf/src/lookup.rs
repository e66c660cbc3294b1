//! Dotted-path configuration lookup

use std::collections::HashMap;

/// Read access to string settings keyed by a dotted path.
///
/// Implementors only answer [`get`](ConfigLookup::get); the fallback handling
/// lives in the provided [`get_or`](ConfigLookup::get_or).
///
/// # Examples
///
/// ```
/// use formcraft_conf::ConfigLookup;
/// use std::collections::HashMap;
///
/// let mut flat = HashMap::new();
/// flat.insert("forms.form.class".to_string(), "stacked".to_string());
///
/// assert_eq!(flat.get_or("forms.form.class", "form"), "stacked");
/// assert_eq!(flat.get_or("forms.form.inline-class", "form d-inline"), "form d-inline");
/// ```
pub trait ConfigLookup: Send + Sync {
	/// Look up a string value by dotted path
	fn get(&self, path: &str) -> Option<String>;

	/// Look up a string value, falling back to `fallback` when unset
	fn get_or(&self, path: &str, fallback: &str) -> String {
		self.get(path).unwrap_or_else(|| fallback.to_string())
	}
}

/// Configuration with no entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyConfig;

impl ConfigLookup for EmptyConfig {
	fn get(&self, _path: &str) -> Option<String> {
		None
	}
}

impl ConfigLookup for HashMap<String, String> {
	fn get(&self, path: &str) -> Option<String> {
		HashMap::get(self, path).cloned()
	}
}

impl<T: ConfigLookup + ?Sized> ConfigLookup for &T {
	fn get(&self, path: &str) -> Option<String> {
		(**self).get(path)
	}
}

impl<T: ConfigLookup + ?Sized> ConfigLookup for std::sync::Arc<T> {
	fn get(&self, path: &str) -> Option<String> {
		(**self).get(path)
	}
}
