//! In-memory method metadata.
//!
//! [`TypeRegistry`] is the stock [`MethodResolver`]. It is assembled once with
//! a [`RegistryBuilder`] and is read-only afterwards:
//!
//! ```
//! use warden_meta::{MethodDescriptor, MethodResolver, TypeRef, TypeRegistry};
//!
//! let registry = TypeRegistry::builder("calculator")
//!     .push(MethodDescriptor::new("Calculator", "add", ["int", "int"]).returning("int"))
//!     .build()
//!     .unwrap();
//!
//! let int = TypeRef::named("int");
//! let add = registry.resolve(&TypeRef::named("Calculator"), "add", &[int.clone(), int]);
//! assert!(add.is_some());
//! ```

use rustc_hash::FxHashMap;

use crate::{MethodDescriptor, MethodHandle, MethodResolver, RegistryError, Result, TypeRef};


/// Policy for handling a signature declared twice on the same type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Fail the build with [`RegistryError::DuplicateMethod`].
	#[default]
	Reject,
	/// Keep the first declaration seen.
	FirstWins,
	/// Overwrite with the last declaration seen.
	LastWins,
}

#[derive(Default)]
struct TypeEntry {
	methods: Vec<MethodHandle>,
	by_name: FxHashMap<String, Vec<usize>>,
}

impl TypeEntry {
	fn find(&self, name: &str, parameter_types: &[TypeRef]) -> Option<usize> {
		self.by_name
			.get(name)?
			.iter()
			.copied()
			.find(|&idx| self.methods[idx].signature().parameter_types() == parameter_types)
	}
}

/// Indexed method metadata for a set of owning types.
pub struct TypeRegistry {
	label: &'static str,
	types: FxHashMap<TypeRef, TypeEntry>,
}

impl TypeRegistry {
	/// Starts a builder; `label` appears in errors and logs.
	pub fn builder(label: &'static str) -> RegistryBuilder {
		RegistryBuilder::new(label)
	}

	/// Returns the label given to the builder.
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Returns true if `owner` was declared, with or without methods.
	pub fn contains_type(&self, owner: &TypeRef) -> bool {
		self.types.contains_key(owner)
	}

	/// Returns the methods of `owner` in declaration order.
	pub fn methods_of(&self, owner: &TypeRef) -> &[MethodHandle] {
		self.types
			.get(owner)
			.map(|entry| entry.methods.as_slice())
			.unwrap_or_default()
	}

	/// Returns the number of declared types.
	pub fn len(&self) -> usize {
		self.types.len()
	}

	/// Returns true if no type was declared.
	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}
}

impl MethodResolver for TypeRegistry {
	fn resolve(&self, owner: &TypeRef, name: &str, parameter_types: &[TypeRef]) -> Option<MethodHandle> {
		let entry = self.types.get(owner)?;
		let found = entry
			.find(name, parameter_types)
			.map(|idx| entry.methods[idx].clone());
		tracing::trace!(
			registry = self.label,
			owner = %owner,
			method = name,
			found = found.is_some(),
			"method lookup",
		);
		found
	}
}

/// Builder for constructing a [`TypeRegistry`].
pub struct RegistryBuilder {
	label: &'static str,
	types: Vec<TypeRef>,
	methods: Vec<MethodDescriptor>,
	policy: DuplicatePolicy,
}

impl RegistryBuilder {
	/// Creates an empty builder with the given label for error messages.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			types: Vec::new(),
			methods: Vec::new(),
			policy: DuplicatePolicy::default(),
		}
	}

	/// Sets the duplicate signature handling policy.
	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Declares a type even if it has no methods.
	pub fn declare_type(mut self, owner: impl Into<TypeRef>) -> Self {
		self.types.push(owner.into());
		self
	}

	/// Adds a single method declaration; its owner is declared implicitly.
	pub fn push(mut self, method: MethodDescriptor) -> Self {
		self.methods.push(method);
		self
	}

	/// Adds multiple method declarations.
	pub fn extend<I: IntoIterator<Item = MethodDescriptor>>(mut self, methods: I) -> Self {
		self.methods.extend(methods);
		self
	}

	/// Builds the registry, resolving duplicates according to policy.
	///
	/// # Errors
	///
	/// Returns [`RegistryError::DuplicateMethod`] if a type declares the same
	/// signature twice and the policy is [`DuplicatePolicy::Reject`].
	pub fn build(self) -> Result<TypeRegistry> {
		let mut types: FxHashMap<TypeRef, TypeEntry> = FxHashMap::default();
		for owner in self.types {
			types.entry(owner).or_default();
		}

		for method in self.methods {
			let entry = types.entry(method.owner().clone()).or_default();
			let signature = method.signature();
			match entry.find(signature.name(), signature.parameter_types()) {
				Some(existing) => match self.policy {
					DuplicatePolicy::Reject => {
						return Err(RegistryError::DuplicateMethod {
							label: self.label,
							owner: method.owner().clone(),
							signature: signature.clone(),
						});
					}
					DuplicatePolicy::FirstWins => {}
					DuplicatePolicy::LastWins => {
						entry.methods[existing] = MethodHandle::new(method);
					}
				},
				None => {
					let idx = entry.methods.len();
					entry
						.by_name
						.entry(signature.name().to_owned())
						.or_default()
						.push(idx);
					entry.methods.push(MethodHandle::new(method));
				}
			}
		}

		tracing::debug!(
			registry = self.label,
			types = types.len(),
			"type registry built",
		);

		Ok(TypeRegistry {
			label: self.label,
			types,
		})
	}
}
