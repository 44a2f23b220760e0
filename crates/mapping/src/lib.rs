//! Programmatic constraint mappings for method parameters and return values.
//!
//! Instead of annotating declarations, callers describe constraints at
//! startup by walking a chain of creational contexts. Each context targets
//! one method element and records declarations into a shared sink:
//!
//! - [`MappingSession`]: Resolver, sink and config shared by a context chain
//! - [`TypeContext`], [`MethodContext`]: Entry points for a type and a method
//! - [`ParameterContext`], [`ReturnValueContext`]: Declare constraints and
//!   cascades for one element, then pivot to another
//! - [`ConstraintMapping`]: Default [`MappingSink`], readable afterwards
//!
//! Nothing here evaluates constraints against values.

mod config;
pub mod context;
mod decl;
mod def;
mod error;
mod mapping;
mod session;
mod sink;

pub use config::{MappingConfig, ParameterIndexCheck};
pub use context::{
	ElementContextBase, MethodContext, MethodElementContext, ParameterContext, ReturnValueContext,
	TypeContext,
};
pub use decl::{ConfiguredConstraint, ElementKind, MethodCascadeDef, MethodElement};
pub use def::{AttributeValue, ConstraintDef, ConstraintKind};
pub use error::{MappingError, Result};
pub use mapping::ConstraintMapping;
pub use session::MappingSession;
pub use sink::MappingSink;
#[cfg(test)]
use tracing_subscriber as _;
