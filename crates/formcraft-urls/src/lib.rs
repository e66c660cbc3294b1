//! URL resolution for form targets
//!
//! A form's `action` attribute is produced by the host application's URL
//! machinery. This crate defines that capability as the [`UrlResolver`] trait
//! and ships [`UrlReverser`], a small named-route table that satisfies it.
//!
//! ```
//! use formcraft_urls::{UrlResolver, UrlReverser};
//!
//! let mut urls = UrlReverser::new();
//! urls.register_path("users:destroy", "/users/{id}/");
//!
//! assert_eq!(urls.route("users:destroy", &["42".to_string()]).unwrap(), "/users/42/");
//! ```

pub mod error;
pub mod resolver;
pub mod reverse;

pub use error::{ReverseError, ReverseResult};
pub use resolver::UrlResolver;
pub use reverse::{UrlReverser, extract_param_names, reverse_positional};
