//! Declarations recorded into a mapping.

use std::fmt;

use warden_meta::{MethodHandle, MethodSignature, TypeRef};

use crate::ConstraintDef;

/// Discriminant of a [`MethodElement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
	/// A method parameter.
	Parameter,
	/// A method return value.
	ReturnValue,
}

/// A parameter (by zero-based index) or the return value of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodElement {
	/// Parameter at the given position.
	Parameter(usize),
	/// The method's return value.
	ReturnValue,
}

impl MethodElement {
	/// Returns the element kind without the parameter index.
	pub fn kind(self) -> ElementKind {
		match self {
			Self::Parameter(_) => ElementKind::Parameter,
			Self::ReturnValue => ElementKind::ReturnValue,
		}
	}

	/// Returns the parameter index, or `None` for the return value.
	pub fn parameter_index(self) -> Option<usize> {
		match self {
			Self::Parameter(index) => Some(index),
			Self::ReturnValue => None,
		}
	}
}

impl fmt::Display for MethodElement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Parameter(index) => write!(f, "parameter {index}"),
			Self::ReturnValue => f.write_str("return value"),
		}
	}
}

/// A constraint definition bound to one element of a resolved method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguredConstraint {
	definition: ConstraintDef,
	method: MethodHandle,
	element: MethodElement,
}

impl ConfiguredConstraint {
	/// Binds `definition` to parameter `index` of `method`.
	pub fn for_parameter(definition: ConstraintDef, method: MethodHandle, index: usize) -> Self {
		Self {
			definition,
			method,
			element: MethodElement::Parameter(index),
		}
	}

	/// Binds `definition` to the return value of `method`.
	pub fn for_return_value(definition: ConstraintDef, method: MethodHandle) -> Self {
		Self {
			definition,
			method,
			element: MethodElement::ReturnValue,
		}
	}

	pub fn definition(&self) -> &ConstraintDef {
		&self.definition
	}

	pub fn method(&self) -> &MethodHandle {
		&self.method
	}

	pub fn element(&self) -> MethodElement {
		self.element
	}
}

/// Marks a method element for recursive ("cascaded") validation.
///
/// Identified by owner and signature rather than by handle, so a cascade can
/// be matched against metadata from any resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodCascadeDef {
	owner: TypeRef,
	signature: MethodSignature,
	element: MethodElement,
}

impl MethodCascadeDef {
	pub fn new(owner: TypeRef, signature: MethodSignature, element: MethodElement) -> Self {
		Self {
			owner,
			signature,
			element,
		}
	}

	pub fn owner(&self) -> &TypeRef {
		&self.owner
	}

	pub fn signature(&self) -> &MethodSignature {
		&self.signature
	}

	pub fn method_name(&self) -> &str {
		self.signature.name()
	}

	pub fn parameter_types(&self) -> &[TypeRef] {
		self.signature.parameter_types()
	}

	pub fn element(&self) -> MethodElement {
		self.element
	}

	pub fn kind(&self) -> ElementKind {
		self.element.kind()
	}
}
