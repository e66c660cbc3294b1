//! Submission target resolution

use crate::options::{FormOptions, Target};
use formcraft_urls::{ReverseResult, UrlResolver};

/// Resolve the `action` URL of a form
///
/// The target's name and parameters go to the resolver unchanged. Without a
/// target the form posts back to the current page. Resolver errors are
/// returned as-is.
///
/// # Examples
///
/// ```
/// use formcraft_forms::{FormOptions, resolve_action};
/// use formcraft_urls::UrlReverser;
///
/// let mut urls = UrlReverser::new().with_current("/profile");
/// urls.register_path("users.update", "/users/{user}");
///
/// let options = FormOptions::builder().route(("users.update", ["7"])).build();
/// assert_eq!(resolve_action(&options, &urls).unwrap(), "/users/7");
///
/// let fallback = FormOptions::builder().build();
/// assert_eq!(resolve_action(&fallback, &urls).unwrap(), "/profile");
/// ```
pub fn resolve_action(options: &FormOptions, urls: &dyn UrlResolver) -> ReverseResult<String> {
	resolve_target(options.target(), urls)
}

/// Resolve a single optional target
pub fn resolve_target(target: Option<&Target>, urls: &dyn UrlResolver) -> ReverseResult<String> {
	let result = match target {
		Some(Target::Url(spec)) => urls.to(&spec.name, &spec.params),
		Some(Target::Route(spec)) => urls.route(&spec.name, &spec.params),
		Some(Target::Action(spec)) => urls.action(&spec.name, &spec.params),
		None => Ok(urls.current()),
	};

	if let Err(err) = &result {
		tracing::warn!(?target, error = %err, "could not resolve form target");
	}
	result
}
