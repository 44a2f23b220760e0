use warden_meta::{MethodHandle, MethodSignature, TypeRef};

use super::{ElementContextBase, MethodElementContext, ReturnValueContext};
use crate::{ConfiguredConstraint, ConstraintDef, MappingSession, MethodCascadeDef, MethodElement, Result};

/// Context for one parameter of one method on one type.
///
/// The method is resolved when the context is built and cached for its
/// lifetime. [`constraint`](Self::constraint) and
/// [`mark_cascaded`](Self::mark_cascaded) append to the session's sink and
/// return the same context; [`parameter`](Self::parameter) and
/// [`return_value`](Self::return_value) build new contexts and append
/// nothing.
#[derive(Debug, Clone)]
pub struct ParameterContext {
	base: ElementContextBase,
	signature: MethodSignature,
	index: usize,
	method: MethodHandle,
}

impl ParameterContext {
	/// Builds a context for parameter `index` of `owner::method_name(parameter_types)`.
	///
	/// # Errors
	///
	/// - [`MappingError::InvalidMethodReference`] if the owner declares no
	///   method with exactly this name and parameter types.
	/// - [`MappingError::ParameterIndexOutOfRange`] if `index` is not below
	///   the method's arity and the session uses
	///   [`ParameterIndexCheck::Eager`](crate::ParameterIndexCheck::Eager).
	///
	/// [`MappingError::InvalidMethodReference`]: crate::MappingError::InvalidMethodReference
	/// [`MappingError::ParameterIndexOutOfRange`]: crate::MappingError::ParameterIndexOutOfRange
	pub fn new<I>(
		owner: impl Into<TypeRef>,
		method_name: &str,
		parameter_types: I,
		index: usize,
		session: MappingSession,
	) -> Result<Self>
	where
		I: IntoIterator,
		I::Item: Into<TypeRef>,
	{
		Self::from_signature(
			ElementContextBase::new(owner.into(), session),
			MethodSignature::new(method_name, parameter_types),
			index,
		)
	}

	pub(crate) fn from_signature(
		base: ElementContextBase,
		signature: MethodSignature,
		index: usize,
	) -> Result<Self> {
		let method = base.resolve(&signature)?;
		base.check_parameter_index(&method, index)?;
		Ok(Self {
			base,
			signature,
			index,
			method,
		})
	}

	pub fn signature(&self) -> &MethodSignature {
		&self.signature
	}

	/// Returns the handle resolved at construction.
	pub fn method_handle(&self) -> &MethodHandle {
		&self.method
	}

	pub fn parameter_index(&self) -> usize {
		self.index
	}

	pub fn element(&self) -> MethodElement {
		MethodElement::Parameter(self.index)
	}

	/// Declares `definition` for this parameter.
	pub fn constraint(self, definition: ConstraintDef) -> Self {
		self.base
			.session()
			.sink()
			.append_constraint(ConfiguredConstraint::for_parameter(
				definition,
				self.method.clone(),
				self.index,
			));
		self
	}

	/// Marks this parameter for cascaded validation.
	pub fn mark_cascaded(self) -> Self {
		self.base.session().sink().append_cascade(MethodCascadeDef::new(
			self.base.owner().clone(),
			self.signature.clone(),
			self.element(),
		));
		self
	}

	/// Switches to parameter `index` of the same method.
	///
	/// The method is resolved again; errors are the same as for
	/// [`new`](Self::new).
	pub fn parameter(&self, index: usize) -> Result<ParameterContext> {
		Self::from_signature(self.base.clone(), self.signature.clone(), index)
	}

	/// Switches to the return value of the same method.
	///
	/// # Errors
	///
	/// See [`ReturnValueContext::new`].
	pub fn return_value(&self) -> Result<ReturnValueContext> {
		ReturnValueContext::from_signature(self.base.clone(), self.signature.clone())
	}
}

impl MethodElementContext for ParameterContext {
	fn base(&self) -> &ElementContextBase {
		&self.base
	}
}
