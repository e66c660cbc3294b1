use formcraft_urls::ReverseError;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	/// The field list was empty or an entry did not name exactly one field
	#[error("Invalid field set: {0}")]
	InvalidFieldSet(String),
	/// The host could not resolve a route, action or link; carried unmodified
	#[error(transparent)]
	UnresolvableTarget(#[from] ReverseError),
	/// A host capability was not supplied when the form was built
	#[error("Missing capability: {0}")]
	MissingCapability(&'static str),
}

pub type FormResult<T> = Result<T, FormError>;
