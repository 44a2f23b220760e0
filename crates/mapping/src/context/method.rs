use warden_meta::{MethodHandle, MethodSignature, TypeRef};

use super::{ElementContextBase, MethodElementContext, ParameterContext, ReturnValueContext};
use crate::{MappingSession, Result};

/// Context for one resolved method, before an element has been chosen.
#[derive(Debug, Clone)]
pub struct MethodContext {
	base: ElementContextBase,
	signature: MethodSignature,
	method: MethodHandle,
}

impl MethodContext {
	/// Resolves `owner::method_name(parameter_types)`.
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

	/// Selects parameter `index` of this method.
	///
	/// # Errors
	///
	/// See [`ParameterContext::new`].
	pub fn parameter(&self, index: usize) -> Result<ParameterContext> {
		ParameterContext::from_signature(self.base.clone(), self.signature.clone(), index)
	}

	/// Selects the return value of this method.
	///
	/// # Errors
	///
	/// See [`ReturnValueContext::new`].
	pub fn return_value(&self) -> Result<ReturnValueContext> {
		ReturnValueContext::from_signature(self.base.clone(), self.signature.clone())
	}
}

impl MethodElementContext for MethodContext {
	fn base(&self) -> &ElementContextBase {
		&self.base
	}
}
