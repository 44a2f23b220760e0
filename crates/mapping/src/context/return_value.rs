use warden_meta::{MethodHandle, MethodSignature, TypeRef};

use super::{ElementContextBase, MethodElementContext, ParameterContext};
use crate::{ConfiguredConstraint, ConstraintDef, MappingSession, MethodCascadeDef, MethodElement, Result};

/// Context for the return value of one method on one type.
#[derive(Debug, Clone)]
pub struct ReturnValueContext {
	base: ElementContextBase,
	signature: MethodSignature,
	method: MethodHandle,
}

impl ReturnValueContext {
	/// Builds a context for the return value of `owner::method_name(parameter_types)`.
	///
	/// # Errors
	///
	/// Returns [`MappingError::InvalidMethodReference`](crate::MappingError::InvalidMethodReference)
	/// if the method does not exist.
	pub fn new<I>(
		owner: impl Into<TypeRef>,
		method_name: &str,
		parameter_types: I,
		session: MappingSession,
	) -> Result<Self>
	where
		I: IntoIterator,
		I::Item: Into<TypeRef>,
	{
		Self::from_signature(
			ElementContextBase::new(owner.into(), session),
			MethodSignature::new(method_name, parameter_types),
		)
	}

	pub(crate) fn from_signature(base: ElementContextBase, signature: MethodSignature) -> Result<Self> {
		let method = base.resolve(&signature)?;
		Ok(Self {
			base,
			signature,
			method,
		})
	}

	pub fn signature(&self) -> &MethodSignature {
		&self.signature
	}

	pub fn method_handle(&self) -> &MethodHandle {
		&self.method
	}

	pub fn element(&self) -> MethodElement {
		MethodElement::ReturnValue
	}

	/// Declares `definition` for the return value.
	pub fn constraint(self, definition: ConstraintDef) -> Self {
		self.base
			.session()
			.sink()
			.append_constraint(ConfiguredConstraint::for_return_value(
				definition,
				self.method.clone(),
			));
		self
	}

	/// Marks the return value for cascaded validation.
	pub fn mark_cascaded(self) -> Self {
		self.base.session().sink().append_cascade(MethodCascadeDef::new(
			self.base.owner().clone(),
			self.signature.clone(),
			MethodElement::ReturnValue,
		));
		self
	}

	/// Switches to parameter `index` of the same method.
	///
	/// # Errors
	///
	/// See [`ParameterContext::new`].
	pub fn parameter(&self, index: usize) -> Result<ParameterContext> {
		ParameterContext::from_signature(self.base.clone(), self.signature.clone(), index)
	}
}

impl MethodElementContext for ReturnValueContext {
	fn base(&self) -> &ElementContextBase {
		&self.base
	}
}
