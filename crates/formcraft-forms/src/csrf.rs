//! Anti-forgery token capability and the reserved hidden field names

use rand::Rng;
use rand::distributions::Alphanumeric;
use std::sync::Arc;

/// Name of the hidden anti-forgery field
pub const TOKEN_FIELD: &str = "_token";
/// Name of the hidden field carrying a spoofed HTTP method
pub const METHOD_FIELD: &str = "_method";
/// Length of tokens produced by [`SessionToken::generate`]
pub const SESSION_TOKEN_LENGTH: usize = 40;

/// Session capability exposing the current anti-forgery token
pub trait TokenSource: Send + Sync {
	fn token(&self) -> String;
}

impl<T: TokenSource + ?Sized> TokenSource for Arc<T> {
	fn token(&self) -> String {
		(**self).token()
	}
}

/// Token held by the current session
///
/// # Examples
///
/// ```
/// use formcraft_forms::{SessionToken, TokenSource};
///
/// let token = SessionToken::generate();
/// assert_eq!(token.token().len(), 40);
/// assert!(token.token().chars().all(|c| c.is_ascii_alphanumeric()));
///
/// assert_eq!(SessionToken::new("abc").token(), "abc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
	value: String,
}

impl SessionToken {
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
		}
	}

	/// Fresh random token for a new session
	pub fn generate() -> Self {
		let value = rand::thread_rng()
			.sample_iter(&Alphanumeric)
			.take(SESSION_TOKEN_LENGTH)
			.map(char::from)
			.collect();
		Self { value }
	}
}

impl TokenSource for SessionToken {
	fn token(&self) -> String {
		self.value.clone()
	}
}

/// Random alphanumeric identifier of `len` characters
pub(crate) fn random_id(len: usize) -> String {
	rand::thread_rng()
		.sample_iter(&Alphanumeric)
		.take(len)
		.map(char::from)
		.collect()
}
