//! # formcraft configuration
//!
//! Settings lookup for form rendering.
//!
//! Hosts hand the renderer a [`ConfigLookup`]: anything that can answer a
//! dotted key such as `forms.buttons.submit` with a string. The lookup is
//! consulted exactly once per render, when a [`RenderConfig`] is resolved,
//! and the resulting value is threaded through the rest of the pipeline.
//!
//! ## Sources
//!
//! - [`Settings`]: a JSON value tree built from TOML or JSON text/files
//! - `HashMap<String, String>`: flat dotted keys
//! - [`EmptyConfig`]: no overrides, built-in defaults only
//!
//! ## Example
//!
//! ```
//! use formcraft_conf::{RenderConfig, Settings};
//!
//! let settings = Settings::from_toml_str(r#"
//! [forms.buttons]
//! submit = "button is-primary"
//! "#).unwrap();
//!
//! let config = RenderConfig::resolve(&settings);
//! assert_eq!(config.submit_class, "button is-primary");
//! assert_eq!(config.cancel_class, "btn btn-secondary");
//! ```

pub mod lookup;
pub mod render;
pub mod settings;
pub mod sources;

pub use lookup::{ConfigLookup, EmptyConfig};
pub use render::RenderConfig;
pub use settings::Settings;
pub use sources::{ConfigSource, JsonFileSource, SourceError, TomlFileSource};

/// Result type for configuration loading
pub type ConfResult<T> = Result<T, SourceError>;
