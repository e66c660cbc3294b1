//! The URL-resolution capability consumed by form rendering

use crate::error::ReverseResult;
use std::sync::Arc;

/// Resolves form targets into URLs.
///
/// Every method receives the identifier and the remaining positional
/// parameters exactly as the caller supplied them. Implementations report
/// unknown names through [`ReverseError`](crate::ReverseError); callers must
/// not swallow those errors.
pub trait UrlResolver: Send + Sync {
	/// Build a URL from a plain path
	fn to(&self, path: &str, params: &[String]) -> ReverseResult<String>;

	/// Build a URL from a named route
	fn route(&self, name: &str, params: &[String]) -> ReverseResult<String>;

	/// Build a URL from a named controller action
	fn action(&self, name: &str, params: &[String]) -> ReverseResult<String>;

	/// The URL of the page being rendered
	fn current(&self) -> String;
}

impl<T: UrlResolver + ?Sized> UrlResolver for Arc<T> {
	fn to(&self, path: &str, params: &[String]) -> ReverseResult<String> {
		(**self).to(path, params)
	}

	fn route(&self, name: &str, params: &[String]) -> ReverseResult<String> {
		(**self).route(name, params)
	}

	fn action(&self, name: &str, params: &[String]) -> ReverseResult<String> {
		(**self).action(name, params)
	}

	fn current(&self) -> String {
		(**self).current()
	}
}
