/// URL reverse resolution
///
/// Routes and controller actions are registered by name with a path pattern
/// containing `{param}` placeholders. Reversal fills the placeholders with
/// positional parameters, in order of appearance.
use crate::error::{ReverseError, ReverseResult};
use crate::resolver::UrlResolver;
use std::collections::HashMap;

/// Extract placeholder names from a pattern, in order of appearance
///
/// # Examples
///
/// ```
/// use formcraft_urls::extract_param_names;
///
/// assert_eq!(extract_param_names("/users/{id}/posts/{post_id}/"), vec!["id", "post_id"]);
/// assert!(extract_param_names("/static/").is_empty());
/// ```
pub fn extract_param_names(pattern: &str) -> Vec<String> {
	let mut names = Vec::new();
	let mut chars = pattern.chars();

	while let Some(ch) = chars.next() {
		if ch == '{' {
			let name: String = chars.by_ref().take_while(|&c| c != '}').collect();
			if !name.is_empty() {
				names.push(name);
			}
		}
	}

	names
}

/// Single-pass positional substitution
///
/// Each `{placeholder}` consumes the next parameter. Placeholders left without
/// a parameter are kept verbatim; callers validate counts beforehand.
///
/// # Examples
///
/// ```
/// use formcraft_urls::reverse_positional;
///
/// let params = vec!["7".to_string(), "12".to_string()];
/// assert_eq!(reverse_positional("/users/{id}/posts/{post}/", &params), "/users/7/posts/12/");
/// ```
pub fn reverse_positional(pattern: &str, params: &[String]) -> String {
	let mut result = String::with_capacity(pattern.len());
	let mut values = params.iter();
	let mut chars = pattern.chars();

	while let Some(ch) = chars.next() {
		if ch == '{' {
			let param_name: String = chars.by_ref().take_while(|&c| c != '}').collect();
			match values.next() {
				Some(value) => result.push_str(value),
				None => {
					result.push('{');
					result.push_str(&param_name);
					result.push('}');
				}
			}
		} else {
			result.push(ch);
		}
	}

	result
}

/// Reject parameter values that would change the shape of the URL
fn validate_reverse_param(value: &str) -> bool {
	let lowered = value.to_ascii_lowercase();
	!value.is_empty()
		&& !value.contains(['/', '\\', '?', '#'])
		&& value != ".."
		&& !lowered.contains("%2f")
		&& !lowered.contains("%5c")
}

fn is_absolute(url: &str) -> bool {
	url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//")
}

/// Named route table implementing [`UrlResolver`]
///
/// # Examples
///
/// ```
/// use formcraft_urls::{UrlResolver, UrlReverser};
///
/// let mut urls = UrlReverser::new().with_base_url("https://example.com");
/// urls.register_path("posts:update", "/posts/{post}/");
/// urls.register_action("PostController@store", "/posts/");
///
/// assert_eq!(urls.route("posts:update", &["3".to_string()]).unwrap(), "https://example.com/posts/3/");
/// assert_eq!(urls.action("PostController@store", &[]).unwrap(), "https://example.com/posts/");
/// assert_eq!(urls.to("about", &[]).unwrap(), "https://example.com/about");
/// ```
#[derive(Debug, Clone, Default)]
pub struct UrlReverser {
	/// Map of route names (including namespace) to path patterns
	routes: HashMap<String, String>,
	/// Map of controller action names to path patterns
	actions: HashMap<String, String>,
	base_url: String,
	current: String,
}

impl UrlReverser {
	pub fn new() -> Self {
		Self::default()
	}

	/// Prefix every produced URL with `base_url` (scheme and host)
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into().trim_end_matches('/').to_string();
		self
	}

	/// Set the path of the page being rendered
	pub fn with_current(mut self, path: impl Into<String>) -> Self {
		self.current = path.into();
		self
	}

	/// Update the path of the page being rendered
	pub fn set_current(&mut self, path: impl Into<String>) {
		self.current = path.into();
	}

	/// Register a route by fully qualified name (e.g. `"users:detail"`)
	///
	/// # Examples
	///
	/// ```
	/// use formcraft_urls::{UrlResolver, UrlReverser};
	///
	/// let mut urls = UrlReverser::new();
	/// urls.register_path("v1:users:detail", "/api/v1/users/{id}/");
	///
	/// let url = urls.route("v1:users:detail", &["123".to_string()]).unwrap();
	/// assert_eq!(url, "/api/v1/users/123/");
	/// ```
	pub fn register_path(&mut self, name: &str, path: &str) {
		self.routes.insert(name.to_string(), path.to_string());
	}

	/// Register a controller action name (e.g. `"UserController@update"`)
	pub fn register_action(&mut self, name: &str, path: &str) {
		self.actions.insert(name.to_string(), path.to_string());
	}

	fn absolute(&self, path: &str) -> String {
		if is_absolute(path) {
			return path.to_string();
		}
		format!("{}/{}", self.base_url, path.trim_start_matches('/'))
	}

	fn reverse_in(
		table: &HashMap<String, String>,
		name: &str,
		params: &[String],
	) -> ReverseResult<String> {
		let pattern = table
			.get(name)
			.ok_or_else(|| ReverseError::NotFound(name.to_string()))?;

		let names = extract_param_names(pattern);
		if let Some(missing) = names.get(params.len()) {
			return Err(ReverseError::Validation(format!("missing param: {}", missing)));
		}
		if params.len() > names.len() {
			return Err(ReverseError::Validation(format!(
				"'{}' takes {} param(s), got {}",
				name,
				names.len(),
				params.len()
			)));
		}

		for (param_name, value) in names.iter().zip(params) {
			if !validate_reverse_param(value) {
				return Err(ReverseError::Validation(format!(
					"invalid param '{}': contains dangerous characters",
					param_name
				)));
			}
		}

		Ok(reverse_positional(pattern, params))
	}
}

impl UrlResolver for UrlReverser {
	fn to(&self, path: &str, params: &[String]) -> ReverseResult<String> {
		if is_absolute(path) {
			return Ok(path.to_string());
		}

		let mut url = self.absolute(path);
		for param in params {
			if !validate_reverse_param(param) {
				return Err(ReverseError::Validation(format!(
					"invalid path segment '{}'",
					param
				)));
			}
			if !url.ends_with('/') {
				url.push('/');
			}
			url.push_str(param);
		}
		Ok(url)
	}

	fn route(&self, name: &str, params: &[String]) -> ReverseResult<String> {
		let path = Self::reverse_in(&self.routes, name, params)?;
		Ok(self.absolute(&path))
	}

	fn action(&self, name: &str, params: &[String]) -> ReverseResult<String> {
		let path = Self::reverse_in(&self.actions, name, params)?;
		Ok(self.absolute(&path))
	}

	fn current(&self) -> String {
		self.absolute(&self.current)
	}
}
