/// Errors raised while turning a name into a URL
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReverseError {
	/// No route or action is registered under the name
	#[error("Reverse for '{0}' not found")]
	NotFound(String),
	/// The name exists but the parameters do not fit its pattern
	#[error("Validation error: {0}")]
	Validation(String),
}

pub type ReverseResult<T> = Result<T, ReverseError>;
