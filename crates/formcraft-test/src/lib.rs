//! Testing utilities for formcraft
//!
//! - [`markup`]: parse rendered attribute fragments back into values and count
//!   occurrences in generated HTML
//! - [`capabilities`]: in-memory and mockall-based host capabilities
//! - [`fixtures`]: rstest fixtures building ready-to-use forms

pub mod capabilities;
pub mod fixtures;
pub mod markup;

pub use capabilities::{FixedToken, MockTokenSource, MockUrlResolver, StaticUrls};
pub use fixtures::{form, html_form, render_config, static_urls};
pub use markup::{
	ParsedAttr, count_occurrences, hidden_fields, parse_attributes, tag_attributes,
};
