//! Type references and method signatures.

use std::fmt;
use std::sync::Arc;

/// Name of a type participating in a mapping.
///
/// Used both for the owning type under configuration and for the entries of
/// a parameter-type list. Cloning is a reference-count bump.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeRef(Arc<str>);

impl TypeRef {
	/// Creates a reference from an explicit type name (e.g. `"int"`).
	pub fn named(name: impl Into<Arc<str>>) -> Self {
		Self(name.into())
	}

	/// Creates a reference naming the Rust type `T`.
	pub fn of<T: ?Sized>() -> Self {
		Self(Arc::from(std::any::type_name::<T>()))
	}

	/// Returns the type name.
	#[inline]
	pub fn name(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for TypeRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for TypeRef {
	fn from(name: &str) -> Self {
		Self::named(name)
	}
}

impl From<String> for TypeRef {
	fn from(name: String) -> Self {
		Self::named(name)
	}
}

/// Method name plus its ordered parameter types.
///
/// Identifies one overload on an owning type. Displays as `name(a, b)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodSignature {
	name: Arc<str>,
	parameter_types: Arc<[TypeRef]>,
}

impl MethodSignature {
	/// Creates a signature from a method name and its parameter types.
	pub fn new<I>(name: impl Into<Arc<str>>, parameter_types: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<TypeRef>,
	{
		Self {
			name: name.into(),
			parameter_types: parameter_types.into_iter().map(Into::into).collect(),
		}
	}

	/// Returns the method name.
	#[inline]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the parameter types in declaration order.
	#[inline]
	pub fn parameter_types(&self) -> &[TypeRef] {
		&self.parameter_types
	}

	/// Returns the number of parameters.
	#[inline]
	pub fn arity(&self) -> usize {
		self.parameter_types.len()
	}

	/// Returns the parameter type names joined by `", "`.
	pub fn parameter_list(&self) -> String {
		self.parameter_types
			.iter()
			.map(TypeRef::name)
			.collect::<Vec<_>>()
			.join(", ")
	}
}

impl fmt::Display for MethodSignature {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}({})", self.name, self.parameter_list())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn signature_display_joins_parameters() {
		let sig = MethodSignature::new("add", ["int", "int"]);
		assert_eq!(sig.to_string(), "add(int, int)");
		assert_eq!(sig.arity(), 2);
	}

	#[test]
	fn signature_display_without_parameters() {
		let sig = MethodSignature::new("reset", Vec::<TypeRef>::new());
		assert_eq!(sig.to_string(), "reset()");
		assert_eq!(sig.parameter_list(), "");
	}

	#[test]
	fn type_ref_of_uses_rust_type_name() {
		assert_eq!(TypeRef::of::<u32>().name(), "u32");
		assert_eq!(TypeRef::of::<String>(), TypeRef::named("alloc::string::String"));
	}
}
