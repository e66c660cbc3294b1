//! Testing utilities.
//!
//! In-memory URL and token capabilities, `rstest` fixtures and helpers that
//! parse generated markup back into attributes and hidden fields.

#[cfg(feature = "test")]
pub use formcraft_test::*;
