//! rstest fixtures

use crate::capabilities::{FixedToken, StaticUrls};
use formcraft_conf::RenderConfig;
use formcraft_forms::{Form, HtmlForm};
use rstest::fixture;

/// Resolver with a handful of routes used across the test suites
///
/// Current page `/posts/create`; routes `posts.store` (`/posts`),
/// `posts.update` and `posts.destroy` (`/posts` plus the id segment); action
/// `PostController@publish` (`/posts/publish`).
#[fixture]
pub fn static_urls() -> StaticUrls {
	StaticUrls::new("/posts/create")
		.with_route("posts.store", "/posts")
		.with_route("posts.update", "/posts")
		.with_route("posts.destroy", "/posts")
		.with_action("PostController@publish", "/posts/publish")
}

#[fixture]
pub fn render_config() -> RenderConfig {
	RenderConfig::default()
}

/// Form with [`static_urls`], the token `test-token` and id `testform01`
#[fixture]
pub fn form(static_urls: StaticUrls, render_config: RenderConfig) -> Form {
	Form::builder()
		.urls(static_urls)
		.tokens(FixedToken::default())
		.config(render_config)
		.form_id("testform01")
		.build()
		.unwrap()
}

#[fixture]
pub fn html_form(form: Form) -> HtmlForm {
	HtmlForm::new(form)
}
