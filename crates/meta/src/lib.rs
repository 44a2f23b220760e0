//! Method metadata for programmatic constraint mappings.
//!
//! This crate provides the lookup side of the mapping API:
//! - [`TypeRef`]: Name of an owning type or a parameter type
//! - [`MethodSignature`]: Method name plus ordered parameter types
//! - [`MethodHandle`]: Resolved, shareable method metadata
//! - [`MethodResolver`]: Looks a method up by owner, name and parameter types
//! - [`TypeRegistry`]: In-memory resolver assembled through [`RegistryBuilder`]

mod error;
mod method;
pub mod registry;
mod types;

pub use error::{RegistryError, Result};
pub use method::{MethodDescriptor, MethodHandle, MethodResolver};
pub use registry::{DuplicatePolicy, RegistryBuilder, TypeRegistry};
pub use types::{MethodSignature, TypeRef};
