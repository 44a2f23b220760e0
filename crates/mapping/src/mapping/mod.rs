//! In-memory constraint mapping.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::RwLock;
use warden_meta::{MethodHandle, MethodSignature, TypeRef};

use crate::{ConfiguredConstraint, ConstraintDef, MappingSink, MethodCascadeDef, MethodElement};


#[derive(Default)]
struct MappingState {
	constraints: Vec<ConfiguredConstraint>,
	cascades: Vec<MethodCascadeDef>,
	types: BTreeSet<TypeRef>,
}

/// Append-only store of constraint and cascade declarations.
///
/// Clones share one store, so a mapping handed to a
/// [`MappingSession`](crate::MappingSession) can still be read through the
/// caller's copy once configuration is finished. Declarations are kept in
/// the order they were made.
#[derive(Clone, Default)]
pub struct ConstraintMapping {
	state: Arc<RwLock<MappingState>>,
}

impl ConstraintMapping {
	/// Creates an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns true if both handles refer to the same store.
	pub fn shares_store_with(&self, other: &ConstraintMapping) -> bool {
		Arc::ptr_eq(&self.state, &other.state)
	}

	/// Returns every constraint declaration in declaration order.
	pub fn constraints(&self) -> Vec<ConfiguredConstraint> {
		self.state.read().constraints.clone()
	}

	/// Returns every cascade declaration in declaration order.
	pub fn cascades(&self) -> Vec<MethodCascadeDef> {
		self.state.read().cascades.clone()
	}

	/// Returns the definitions declared for one element of `method`.
	pub fn constraints_for(&self, method: &MethodHandle, element: MethodElement) -> Vec<ConstraintDef> {
		self.state
			.read()
			.constraints
			.iter()
			.filter(|c| c.element() == element && c.method() == method)
			.map(|c| c.definition().clone())
			.collect()
	}

	/// Returns true if the element was marked for cascaded validation.
	pub fn is_cascaded(&self, owner: &TypeRef, signature: &MethodSignature, element: MethodElement) -> bool {
		self.state.read().cascades.iter().any(|c| {
			c.element() == element && c.owner() == owner && c.signature() == signature
		})
	}

	/// Returns the types that were configured, sorted by name.
	pub fn configured_types(&self) -> Vec<TypeRef> {
		self.state.read().types.iter().cloned().collect()
	}

	/// Returns the total number of declarations.
	pub fn len(&self) -> usize {
		let state = self.state.read();
		state.constraints.len() + state.cascades.len()
	}

	/// Returns true if nothing has been declared.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl MappingSink for ConstraintMapping {
	fn append_constraint(&self, constraint: ConfiguredConstraint) {
		tracing::debug!(
			owner = %constraint.method().owner(),
			method = %constraint.method().signature(),
			element = %constraint.element(),
			constraint = %constraint.definition(),
			"constraint declared",
		);
		let mut state = self.state.write();
		state.types.insert(constraint.method().owner().clone());
		state.constraints.push(constraint);
	}

	fn append_cascade(&self, cascade: MethodCascadeDef) {
		tracing::debug!(
			owner = %cascade.owner(),
			method = %cascade.signature(),
			element = %cascade.element(),
			"cascade declared",
		);
		let mut state = self.state.write();
		state.types.insert(cascade.owner().clone());
		state.cascades.push(cascade);
	}

	fn register_type(&self, owner: &TypeRef) {
		if self.state.write().types.insert(owner.clone()) {
			tracing::debug!(owner = %owner, "type registered");
		}
	}
}

impl std::fmt::Debug for ConstraintMapping {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.state.read();
		f.debug_struct("ConstraintMapping")
			.field("constraints", &state.constraints.len())
			.field("cascades", &state.cascades.len())
			.field("types", &state.types)
			.finish()
	}
}
