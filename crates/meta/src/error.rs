use crate::{MethodSignature, TypeRef};

/// A convenient type alias for `Result` with `E` = [`RegistryError`].
pub type Result<T, E = RegistryError> = std::result::Result<T, E>;

/// Errors raised while assembling a [`TypeRegistry`](crate::TypeRegistry).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
	/// The same method signature was declared twice on one type.
	#[error("duplicate method in {label}: type {owner} declares {signature} more than once")]
	DuplicateMethod {
		/// Label of the registry being built.
		label: &'static str,
		/// Type declaring the method.
		owner: TypeRef,
		/// The repeated signature.
		signature: MethodSignature,
	},
}
