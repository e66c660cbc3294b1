//! Settings sources and render configuration.

#[cfg(feature = "conf")]
pub use formcraft_conf::*;
