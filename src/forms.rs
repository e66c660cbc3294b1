//! Form assembly module.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "forms")]
//! use formcraft::forms::{HtmlForm, HtmlFormOptions};
//! # #[cfg(feature = "forms")]
//! use formcraft::forms::attributes::escape_html;
//! ```

#[cfg(feature = "forms")]
pub use formcraft_forms::*;
