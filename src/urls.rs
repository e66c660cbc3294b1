//! URL resolution capability and named-route reversal.

#[cfg(feature = "urls")]
pub use formcraft_urls::*;
