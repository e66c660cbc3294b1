//! Typed markup fragments
//!
//! Form pieces are collected as [`Fragment`]s and turned into a string in one
//! pass by [`Markup::render`]. Intermediate states stay inspectable in tests.

use crate::attributes::{Attributes, escape_html};
use crate::widget::FieldRenderer;
use std::fmt::Write;

/// One piece of form markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
	/// `<tag{attrs}>`
	Open {
		tag: &'static str,
		attrs: Attributes,
	},
	/// `</tag>`
	Close(&'static str),
	/// Hidden input rendered through the field renderer
	Hidden { name: String, value: String },
	/// Button rendered through the field renderer; the label is trusted markup
	Button { label: String, attrs: Attributes },
	/// `<a href class>label</a>`; the label is escaped
	Link {
		href: String,
		label: String,
		class: Option<String>,
	},
	/// Pre-rendered markup
	Raw(String),
}

impl Fragment {
	pub fn open(tag: &'static str, attrs: Attributes) -> Self {
		Fragment::Open { tag, attrs }
	}

	/// `<div class="...">`
	pub fn div(class: impl Into<String>) -> Self {
		Fragment::Open {
			tag: "div",
			attrs: Attributes::new().with("class", class.into()),
		}
	}

	pub fn hidden(name: impl Into<String>, value: impl Into<String>) -> Self {
		Fragment::Hidden {
			name: name.into(),
			value: value.into(),
		}
	}

	pub fn button(label: impl Into<String>, attrs: Attributes) -> Self {
		Fragment::Button {
			label: label.into(),
			attrs,
		}
	}

	fn write_to(&self, out: &mut String, renderer: &dyn FieldRenderer) {
		match self {
			Fragment::Open { tag, attrs } => {
				let _ = write!(out, "<{}{}>", tag, attrs);
			}
			Fragment::Close(tag) => {
				let _ = write!(out, "</{}>", tag);
			}
			Fragment::Hidden { name, value } => {
				out.push_str(&renderer.input("hidden", name, Some(value), &Attributes::new()));
			}
			Fragment::Button { label, attrs } => out.push_str(&renderer.button(label, attrs)),
			Fragment::Link { href, label, class } => {
				let attrs = Attributes::new()
					.with("href", href.as_str())
					.with("class", class.clone());
				let _ = write!(out, "<a{}>{}</a>", attrs, escape_html(label));
			}
			Fragment::Raw(html) => out.push_str(html),
		}
	}
}

/// Ordered fragment sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
	fragments: Vec<Fragment>,
}

impl Markup {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, fragment: Fragment) -> &mut Self {
		self.fragments.push(fragment);
		self
	}

	pub fn extend(&mut self, fragments: impl IntoIterator<Item = Fragment>) -> &mut Self {
		self.fragments.extend(fragments);
		self
	}

	pub fn fragments(&self) -> &[Fragment] {
		&self.fragments
	}

	/// Number of hidden fields named `name`
	pub fn count_hidden(&self, name: &str) -> usize {
		self.fragments
			.iter()
			.filter(|f| matches!(f, Fragment::Hidden { name: n, .. } if n == name))
			.count()
	}

	pub fn render(&self, renderer: &dyn FieldRenderer) -> String {
		let mut out = String::new();
		for fragment in &self.fragments {
			fragment.write_to(&mut out, renderer);
		}
		out
	}
}

impl IntoIterator for Markup {
	type Item = Fragment;
	type IntoIter = std::vec::IntoIter<Fragment>;

	fn into_iter(self) -> Self::IntoIter {
		self.fragments.into_iter()
	}
}

impl FromIterator<Fragment> for Markup {
	fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
		Self {
			fragments: iter.into_iter().collect(),
		}
	}
}
