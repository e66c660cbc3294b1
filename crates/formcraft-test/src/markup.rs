//! Parsing helpers for generated markup

use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(?:="([^"]*)")?"#).unwrap()
});

static HIDDEN_INPUT: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r#"<input type="hidden"[^>]*>"#).unwrap());

/// Attribute recovered from a fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedAttr {
	Text(String),
	/// Bare attribute such as `disabled`
	Flag,
}

fn unescape(value: &str) -> String {
	value
		.replace("&quot;", "\"")
		.replace("&lt;", "<")
		.replace("&gt;", ">")
		.replace("&#10;", "\n")
		.replace("&#13;", "\r")
		.replace("&amp;", "&")
}

/// Parse a serialized attribute fragment (` class="btn" disabled`)
///
/// # Examples
///
/// ```
/// use formcraft_test::{ParsedAttr, parse_attributes};
///
/// let attrs = parse_attributes(r#" class="btn" disabled title="a &amp; b""#);
/// assert_eq!(attrs["class"], ParsedAttr::Text("btn".to_string()));
/// assert_eq!(attrs["disabled"], ParsedAttr::Flag);
/// assert_eq!(attrs["title"], ParsedAttr::Text("a & b".to_string()));
/// ```
pub fn parse_attributes(fragment: &str) -> IndexMap<String, ParsedAttr> {
	ATTRIBUTE
		.captures_iter(fragment)
		.map(|caps| {
			let value = match caps.get(2) {
				Some(value) => ParsedAttr::Text(unescape(value.as_str())),
				None => ParsedAttr::Flag,
			};
			(caps[1].to_string(), value)
		})
		.collect()
}

/// Attributes of the first `<tag ...>` in `html`
pub fn tag_attributes(html: &str, tag: &str) -> Option<IndexMap<String, ParsedAttr>> {
	let start = html.find(&format!("<{}", tag))? + tag.len() + 1;
	let end = start + html[start..].find('>')?;
	Some(parse_attributes(&html[start..end]))
}

/// `(name, value)` of every hidden input, in document order
pub fn hidden_fields(html: &str) -> Vec<(String, String)> {
	HIDDEN_INPUT
		.find_iter(html)
		.filter_map(|m| {
			let attrs = parse_attributes(&m.as_str()["<input".len()..m.as_str().len() - 1]);
			match (attrs.get("name"), attrs.get("value")) {
				(Some(ParsedAttr::Text(name)), Some(ParsedAttr::Text(value))) => {
					Some((name.clone(), value.clone()))
				}
				_ => None,
			}
		})
		.collect()
}

/// Non-overlapping occurrences of `needle` in `haystack`
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
	haystack.matches(needle).count()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_hidden_fields_in_order() {
		let html = concat!(
			r#"<form method="POST"><input type="hidden" name="a" value="1">"#,
			r#"<input type="text" name="visible"><input type="hidden" name="_token" value="t"></form>"#
		);
		assert_eq!(
			hidden_fields(html),
			vec![
				("a".to_string(), "1".to_string()),
				("_token".to_string(), "t".to_string())
			]
		);
	}

	#[rstest]
	fn test_tag_attributes() {
		let attrs = tag_attributes(r#"<div><form method="GET" action="/x"></form></div>"#, "form").unwrap();
		assert_eq!(attrs.keys().collect::<Vec<_>>(), ["method", "action"]);
	}

	#[rstest]
	#[case("aaa", "a", 3)]
	#[case("<form></form><form>", "<form", 2)]
	#[case("", "x", 0)]
	fn test_count_occurrences(#[case] haystack: &str, #[case] needle: &str, #[case] expected: usize) {
		assert_eq!(count_occurrences(haystack, needle), expected);
	}
}
