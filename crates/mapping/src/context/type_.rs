use warden_meta::TypeRef;

use super::{ElementContextBase, MethodElementContext};
use crate::MappingSession;

/// Entry context for one owning type.
///
/// Creating it registers the type with the session's sink. Methods of the
/// type are reached through [`MethodElementContext::method`].
#[derive(Debug, Clone)]
pub struct TypeContext {
	base: ElementContextBase,
}

impl TypeContext {
	/// Starts configuring `owner` in `session`.
	pub fn new(owner: impl Into<TypeRef>, session: MappingSession) -> Self {
		let owner = owner.into();
		session.sink().register_type(&owner);
		Self {
			base: ElementContextBase::new(owner, session),
		}
	}
}

impl MethodElementContext for TypeContext {
	fn base(&self) -> &ElementContextBase {
		&self.base
	}
}
