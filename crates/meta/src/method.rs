//! Resolved method metadata and the resolver seam.

use std::fmt;
use std::sync::Arc;

use crate::{MethodSignature, TypeRef};

/// Declared method on an owning type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodDescriptor {
	owner: TypeRef,
	signature: MethodSignature,
	return_type: Option<TypeRef>,
}

impl MethodDescriptor {
	/// Creates a descriptor for a method returning nothing.
	pub fn new<I>(owner: impl Into<TypeRef>, name: &str, parameter_types: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<TypeRef>,
	{
		Self {
			owner: owner.into(),
			signature: MethodSignature::new(name, parameter_types),
			return_type: None,
		}
	}

	/// Sets the declared return type.
	pub fn returning(mut self, return_type: impl Into<TypeRef>) -> Self {
		self.return_type = Some(return_type.into());
		self
	}

	/// Returns the declaring type.
	pub fn owner(&self) -> &TypeRef {
		&self.owner
	}

	/// Returns the method signature.
	pub fn signature(&self) -> &MethodSignature {
		&self.signature
	}

	/// Returns the declared return type, or `None` for methods without one.
	pub fn return_type(&self) -> Option<&TypeRef> {
		self.return_type.as_ref()
	}
}

/// Shared handle to a resolved [`MethodDescriptor`].
///
/// Handles compare by value; two lookups of the same signature produce equal
/// handles.
#[derive(Debug, Clone, Hash)]
pub struct MethodHandle(Arc<MethodDescriptor>);

impl MethodHandle {
	/// Wraps a descriptor.
	pub fn new(descriptor: MethodDescriptor) -> Self {
		Self(Arc::new(descriptor))
	}

	/// Returns the declaring type.
	#[inline]
	pub fn owner(&self) -> &TypeRef {
		&self.0.owner
	}

	/// Returns the method signature.
	#[inline]
	pub fn signature(&self) -> &MethodSignature {
		&self.0.signature
	}

	/// Returns the method name.
	#[inline]
	pub fn name(&self) -> &str {
		self.0.signature.name()
	}

	/// Returns the number of declared parameters.
	#[inline]
	pub fn arity(&self) -> usize {
		self.0.signature.arity()
	}

	/// Returns the declared return type.
	#[inline]
	pub fn return_type(&self) -> Option<&TypeRef> {
		self.0.return_type.as_ref()
	}

	/// Returns the underlying descriptor.
	#[inline]
	pub fn descriptor(&self) -> &MethodDescriptor {
		&self.0
	}
}

impl PartialEq for MethodHandle {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
	}
}

impl Eq for MethodHandle {}

impl From<MethodDescriptor> for MethodHandle {
	fn from(descriptor: MethodDescriptor) -> Self {
		Self::new(descriptor)
	}
}

impl fmt::Display for MethodHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}::{}", self.0.owner, self.0.signature)
	}
}

/// Looks up a declared method by owning type, name and exact parameter types.
///
/// Returns `None` when the owner declares no such overload. Callers decide
/// whether a miss is fatal.
pub trait MethodResolver: Send + Sync {
	/// Resolves `owner::name(parameter_types)`.
	fn resolve(&self, owner: &TypeRef, name: &str, parameter_types: &[TypeRef]) -> Option<MethodHandle>;

	/// Resolves a prepared signature.
	fn resolve_signature(&self, owner: &TypeRef, signature: &MethodSignature) -> Option<MethodHandle> {
		self.resolve(owner, signature.name(), signature.parameter_types())
	}
}

impl<R: MethodResolver + ?Sized> MethodResolver for Arc<R> {
	fn resolve(&self, owner: &TypeRef, name: &str, parameter_types: &[TypeRef]) -> Option<MethodHandle> {
		(**self).resolve(owner, name, parameter_types)
	}
}

impl<R: MethodResolver + ?Sized> MethodResolver for &R {
	fn resolve(&self, owner: &TypeRef, name: &str, parameter_types: &[TypeRef]) -> Option<MethodHandle> {
		(**self).resolve(owner, name, parameter_types)
	}
}
