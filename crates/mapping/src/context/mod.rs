//! Creational contexts.
//!
//! A context is an immutable cursor over one configuration target: a type,
//! a method, a method parameter, or a method return value. Operations that
//! declare something for the current target consume the context and hand it
//! back; operations that switch target borrow it and build a new, separately
//! resolved context.
//!
//! ```text
//! MappingSession::type_of ─► TypeContext ─method─► MethodContext
//!                                                   │        │
//!                                             parameter  return_value
//!                                                   ▼        ▼
//!                               ParameterContext ◄──────► ReturnValueContext
//! ```

mod method;
mod parameter;
mod return_value;
mod type_;


pub use method::MethodContext;
pub use parameter::ParameterContext;
pub use return_value::ReturnValueContext;
pub use type_::TypeContext;
use warden_meta::{MethodHandle, MethodSignature, TypeRef};

use crate::{MappingError, MappingSession, ParameterIndexCheck, Result};

/// State common to every creational context: the owning type and the session.
#[derive(Debug, Clone)]
pub struct ElementContextBase {
	owner: TypeRef,
	session: MappingSession,
}

impl ElementContextBase {
	pub(crate) fn new(owner: TypeRef, session: MappingSession) -> Self {
		Self { owner, session }
	}

	/// Returns the type under configuration.
	#[inline]
	pub fn owner(&self) -> &TypeRef {
		&self.owner
	}

	/// Returns the session the context writes to.
	#[inline]
	pub fn session(&self) -> &MappingSession {
		&self.session
	}

	/// Resolves `signature` on the owning type.
	pub(crate) fn resolve(&self, signature: &MethodSignature) -> Result<MethodHandle> {
		self.session
			.resolver()
			.resolve_signature(&self.owner, signature)
			.ok_or_else(|| MappingError::InvalidMethodReference {
				owner: self.owner.clone(),
				signature: signature.clone(),
			})
	}

	/// Applies the session's [`ParameterIndexCheck`] to `index`.
	pub(crate) fn check_parameter_index(&self, method: &MethodHandle, index: usize) -> Result<()> {
		let arity = method.arity();
		if index < arity {
			return Ok(());
		}

		match self.session.config().parameter_index_check {
			ParameterIndexCheck::Unchecked => {
				tracing::warn!(
					owner = %self.owner,
					method = %method.signature(),
					index,
					arity,
					"parameter index out of range; declaration kept",
				);
				Ok(())
			}
			ParameterIndexCheck::Eager => Err(MappingError::ParameterIndexOutOfRange {
				owner: self.owner.clone(),
				signature: method.signature().clone(),
				index,
				arity,
			}),
		}
	}
}

/// Common capability of all creational contexts.
///
/// Implementors expose their [`ElementContextBase`]; the trait derives the
/// shared accessors and the navigation that is valid from any context.
pub trait MethodElementContext {
	/// Returns the shared base state.
	fn base(&self) -> &ElementContextBase;

	/// Returns the type under configuration.
	fn owner(&self) -> &TypeRef {
		self.base().owner()
	}

	/// Returns the session the context writes to.
	fn session(&self) -> &MappingSession {
		self.base().session()
	}

	/// Switches to another method of the same type.
	///
	/// # Errors
	///
	/// Returns [`MappingError::InvalidMethodReference`] if the owning type
	/// declares no such method.
	fn method<I>(&self, name: &str, parameter_types: I) -> Result<MethodContext>
	where
		I: IntoIterator,
		I::Item: Into<TypeRef>,
		Self: Sized,
	{
		MethodContext::from_signature(
			self.base().clone(),
			MethodSignature::new(name, parameter_types),
		)
	}

	/// Starts configuring another type in the same session.
	fn type_of(&self, owner: impl Into<TypeRef>) -> TypeContext
	where
		Self: Sized,
	{
		self.session().type_of(owner)
	}
}
