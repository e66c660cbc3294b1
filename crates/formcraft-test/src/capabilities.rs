//! Host capabilities for tests

use formcraft_forms::TokenSource;
use formcraft_forms::TokenSource as TokenSourceTrait;
use formcraft_urls::UrlResolver as UrlResolverTrait;
use formcraft_urls::{ReverseError, ReverseResult, UrlResolver};
use mockall::mock;
use std::collections::HashMap;

/// Token source returning the same token every time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedToken(pub String);

impl FixedToken {
	pub fn new(token: impl Into<String>) -> Self {
		Self(token.into())
	}
}

impl Default for FixedToken {
	fn default() -> Self {
		Self::new("test-token")
	}
}

impl TokenSource for FixedToken {
	fn token(&self) -> String {
		self.0.clone()
	}
}

/// Resolver with literal route and action tables
///
/// Routes and actions map to fixed URLs; positional parameters are appended
/// as path segments. `to` prefixes paths with `/` and appends segments the
/// same way.
///
/// # Examples
///
/// ```
/// use formcraft_test::StaticUrls;
/// use formcraft_urls::UrlResolver;
///
/// let urls = StaticUrls::new("/page").with_route("users.show", "/users");
/// assert_eq!(urls.route("users.show", &["4".to_string()]).unwrap(), "/users/4");
/// assert_eq!(urls.current(), "/page");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticUrls {
	current: String,
	routes: HashMap<String, String>,
	actions: HashMap<String, String>,
}

impl StaticUrls {
	pub fn new(current: impl Into<String>) -> Self {
		Self {
			current: current.into(),
			..Self::default()
		}
	}

	pub fn with_route(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
		self.routes.insert(name.into(), url.into());
		self
	}

	pub fn with_action(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
		self.actions.insert(name.into(), url.into());
		self
	}

	fn join(base: &str, params: &[String]) -> String {
		let mut url = base.to_string();
		for param in params {
			if !url.ends_with('/') {
				url.push('/');
			}
			url.push_str(param);
		}
		url
	}
}

impl UrlResolver for StaticUrls {
	fn to(&self, path: &str, params: &[String]) -> ReverseResult<String> {
		let base = if path.starts_with('/') || path.contains("://") {
			path.to_string()
		} else {
			format!("/{}", path)
		};
		Ok(Self::join(&base, params))
	}

	fn route(&self, name: &str, params: &[String]) -> ReverseResult<String> {
		let base = self
			.routes
			.get(name)
			.ok_or_else(|| ReverseError::NotFound(name.to_string()))?;
		Ok(Self::join(base, params))
	}

	fn action(&self, name: &str, params: &[String]) -> ReverseResult<String> {
		let base = self
			.actions
			.get(name)
			.ok_or_else(|| ReverseError::NotFound(name.to_string()))?;
		Ok(Self::join(base, params))
	}

	fn current(&self) -> String {
		self.current.clone()
	}
}

mock! {
	/// mockall double of [`UrlResolver`]
	///
	/// ```
	/// use formcraft_test::MockUrlResolver;
	/// use formcraft_urls::UrlResolver;
	///
	/// let mut urls = MockUrlResolver::new();
	/// urls.expect_current().times(1).return_const("/here".to_string());
	/// assert_eq!(urls.current(), "/here");
	/// ```
	pub UrlResolver {}

	impl UrlResolverTrait for UrlResolver {
		fn to(&self, path: &str, params: &[String]) -> ReverseResult<String>;
		fn route(&self, name: &str, params: &[String]) -> ReverseResult<String>;
		fn action(&self, name: &str, params: &[String]) -> ReverseResult<String>;
		fn current(&self) -> String;
	}
}

mock! {
	/// mockall double of [`TokenSource`]
	pub TokenSource {}

	impl TokenSourceTrait for TokenSource {
		fn token(&self) -> String;
	}
}
