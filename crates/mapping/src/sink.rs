use std::sync::Arc;

use warden_meta::TypeRef;

use crate::{ConfiguredConstraint, MethodCascadeDef};

/// Destination for declarations made through creational contexts.
///
/// Contexts only ever append; they never read back. [`ConstraintMapping`]
/// is the stock implementation; tests substitute their own to observe the
/// exact sequence of declarations.
///
/// [`ConstraintMapping`]: crate::ConstraintMapping
pub trait MappingSink: Send + Sync {
	/// Records a constraint declaration.
	fn append_constraint(&self, constraint: ConfiguredConstraint);

	/// Records a cascade declaration.
	fn append_cascade(&self, cascade: MethodCascadeDef);

	/// Notes that `owner` is being configured, even if nothing is declared
	/// for it yet.
	fn register_type(&self, _owner: &TypeRef) {}
}

impl<S: MappingSink + ?Sized> MappingSink for Arc<S> {
	fn append_constraint(&self, constraint: ConfiguredConstraint) {
		(**self).append_constraint(constraint)
	}

	fn append_cascade(&self, cascade: MethodCascadeDef) {
		(**self).append_cascade(cascade)
	}

	fn register_type(&self, owner: &TypeRef) {
		(**self).register_type(owner)
	}
}
