use warden_meta::{MethodSignature, TypeRef};

/// A convenient type alias for `Result` with `E` = [`MappingError`].
pub type Result<T, E = MappingError> = std::result::Result<T, E>;

/// Errors raised while building a constraint mapping.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MappingError {
	/// The owning type declares no method with this exact signature.
	///
	/// Raised when a context is constructed; the caller supplied metadata
	/// that does not exist.
	#[error("Type {owner} doesn't have a method {signature}.")]
	InvalidMethodReference {
		/// Type that was searched.
		owner: TypeRef,
		/// Requested signature.
		signature: MethodSignature,
	},
	/// A parameter index lies outside the method's arity.
	///
	/// Only raised with [`ParameterIndexCheck::Eager`](crate::ParameterIndexCheck::Eager).
	#[error("parameter index {index} is out of range for {owner}::{signature} ({arity} parameters)")]
	ParameterIndexOutOfRange {
		/// Declaring type.
		owner: TypeRef,
		/// Resolved signature.
		signature: MethodSignature,
		/// Requested index.
		index: usize,
		/// Number of declared parameters.
		arity: usize,
	},
	/// Mapping configuration could not be parsed.
	#[error("invalid mapping configuration: {0}")]
	Config(#[from] toml::de::Error),
}
