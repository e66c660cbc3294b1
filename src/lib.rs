//! # Formcraft
//!
//! Declarative HTML form markup for server-rendered Rust web applications.
//!
//! Formcraft turns a short form description into the markup a server-rendered
//! page needs: the opening `<form>` tag with a normalized method, the
//! method-override and anti-forgery hidden fields, single-button action forms
//! with confirmation, modal dialogs, and complete field-driven forms with a
//! configurable button row.
//!
//! ## Feature Flags
//!
//! - `forms` - Form assembly (`formcraft-forms`)
//! - `conf` - Settings sources and [`RenderConfig`] resolution
//! - `urls` - The [`UrlResolver`] capability and the [`UrlReverser`] route table
//! - `test` - In-memory capabilities, fixtures and markup parsers for tests
//! - `minimal` - `forms` only
//! - `full` (default) - Everything above
//!
//! ## Quick Example
//!
//! ```rust
//! use formcraft::prelude::*;
//!
//! let mut urls = UrlReverser::new().with_current("/posts/create");
//! urls.register_path("posts.destroy", "/posts/{post}");
//!
//! let form = Form::builder()
//!     .urls(urls)
//!     .tokens(SessionToken::new("abc123"))
//!     .build()
//!     .unwrap()
//!     .confirm("Delete this post?")
//!     .action("delete", ("posts.destroy", ["7"]), ActionButton::new("Delete"))
//!     .unwrap();
//!
//! let html = form.html();
//! assert!(html.starts_with(r#"<form method="POST" action="/posts/7""#));
//! assert!(html.contains(r#"<input type="hidden" name="_method" value="DELETE">"#));
//! assert!(html.contains(r#"<input type="hidden" name="_token" value="abc123">"#));
//! ```

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "test")]
pub mod test;
#[cfg(feature = "urls")]
pub mod urls;

// Re-export form assembly (forms feature)
#[cfg(feature = "forms")]
pub use formcraft_forms::{
	ActionButton, Attributes, BasicFieldRenderer, ButtonSlot, ButtonSpec, ConfirmSpec,
	FieldConfig, FieldRenderer, Form, FormBuilder, FormError, FormOptions, FormResult, HtmlForm,
	HtmlFormOptions, Method, ModalForm, SessionToken, Target, TargetSpec, TokenSource,
	ValidationErrors,
};

// Re-export settings (conf feature)
#[cfg(feature = "conf")]
pub use formcraft_conf::{ConfigLookup, JsonFileSource, RenderConfig, Settings, TomlFileSource};

// Re-export URL resolution (urls feature)
#[cfg(feature = "urls")]
pub use formcraft_urls::{ReverseError, UrlResolver, UrlReverser};

pub mod prelude {
	#[cfg(feature = "forms")]
	pub use crate::{
		ActionButton, ButtonSlot, FieldConfig, Form, FormError, FormOptions, HtmlForm, Method,
		ModalForm, SessionToken, Target,
	};

	#[cfg(feature = "conf")]
	pub use crate::{RenderConfig, Settings};

	#[cfg(feature = "urls")]
	pub use crate::{UrlResolver, UrlReverser};
}
