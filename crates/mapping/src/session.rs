use std::sync::Arc;

use warden_meta::{MethodResolver, TypeRef};

use crate::{MappingConfig, MappingSink, TypeContext};

struct SessionInner {
	resolver: Arc<dyn MethodResolver>,
	sink: Arc<dyn MappingSink>,
	config: MappingConfig,
}

/// Dependencies shared by every context of one configuration session.
///
/// Bundles the method resolver, the mapping sink and the session config.
/// Cloning is a reference-count bump; every context derived from a session
/// writes to the same sink.
///
/// ```
/// use warden_mapping::{ConstraintDef, ConstraintMapping, MappingSession, MethodElementContext};
/// use warden_meta::{MethodDescriptor, TypeRegistry};
///
/// let registry = TypeRegistry::builder("app")
///     .push(MethodDescriptor::new("Calculator", "add", ["int", "int"]).returning("int"))
///     .build()?;
/// let mapping = ConstraintMapping::new();
/// let session = MappingSession::new(registry, mapping.clone());
///
/// session
///     .type_of("Calculator")
///     .method("add", ["int", "int"])?
///     .parameter(0)?
///     .constraint(ConstraintDef::min(0))
///     .return_value()?
///     .mark_cascaded();
///
/// assert_eq!(mapping.len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct MappingSession {
	inner: Arc<SessionInner>,
}

impl MappingSession {
	/// Creates a session with the default [`MappingConfig`].
	pub fn new(resolver: impl MethodResolver + 'static, sink: impl MappingSink + 'static) -> Self {
		Self::with_config(resolver, sink, MappingConfig::default())
	}

	/// Creates a session with an explicit config.
	pub fn with_config(
		resolver: impl MethodResolver + 'static,
		sink: impl MappingSink + 'static,
		config: MappingConfig,
	) -> Self {
		Self {
			inner: Arc::new(SessionInner {
				resolver: Arc::new(resolver),
				sink: Arc::new(sink),
				config,
			}),
		}
	}

	pub fn resolver(&self) -> &dyn MethodResolver {
		&*self.inner.resolver
	}

	pub fn sink(&self) -> &dyn MappingSink {
		&*self.inner.sink
	}

	pub fn config(&self) -> &MappingConfig {
		&self.inner.config
	}

	/// Returns true if both handles belong to the same session.
	pub fn same_session(&self, other: &MappingSession) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}

	/// Starts configuring `owner`.
	pub fn type_of(&self, owner: impl Into<TypeRef>) -> TypeContext {
		TypeContext::new(owner, self.clone())
	}
}

impl std::fmt::Debug for MappingSession {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MappingSession")
			.field("config", &self.inner.config)
			.finish_non_exhaustive()
	}
}
