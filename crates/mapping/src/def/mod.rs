//! Constraint definitions.
//!
//! A [`ConstraintDef`] describes one rule to attach to a method element. It
//! is a plain value; attaching it to a context records it in the mapping.
//!
//! ```
//! use warden_mapping::ConstraintDef;
//!
//! let def = ConstraintDef::size(1, 64)
//!     .message("name must be 1..64 characters")
//!     .group("create");
//! assert_eq!(def.name(), "Size");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;


/// The rule a [`ConstraintDef`] stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintKind {
	/// Value must be present.
	NotNull,
	/// Value must be absent.
	Null,
	/// Value must be present and non-empty.
	NotEmpty,
	/// Length or element count within `min..=max`.
	Size {
		/// Inclusive lower bound.
		min: usize,
		/// Inclusive upper bound.
		max: usize,
	},
	/// Number no smaller than the bound.
	Min(i64),
	/// Number no larger than the bound.
	Max(i64),
	/// String matching a regular expression.
	Pattern(String),
	/// User-defined constraint identified by name; details live in attributes.
	Custom(Arc<str>),
}

/// Extra named value carried by a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
	/// Boolean attribute.
	Bool(bool),
	/// Integer attribute.
	Int(i64),
	/// String attribute.
	Str(String),
}

impl From<bool> for AttributeValue {
	fn from(v: bool) -> Self {
		Self::Bool(v)
	}
}

impl From<i64> for AttributeValue {
	fn from(v: i64) -> Self {
		Self::Int(v)
	}
}

impl From<&str> for AttributeValue {
	fn from(v: &str) -> Self {
		Self::Str(v.to_owned())
	}
}

impl From<String> for AttributeValue {
	fn from(v: String) -> Self {
		Self::Str(v)
	}
}

/// A constraint definition: a rule plus its message, groups and attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintDef {
	kind: ConstraintKind,
	message: Option<String>,
	groups: Vec<String>,
	attributes: BTreeMap<String, AttributeValue>,
}

impl ConstraintDef {
	/// Creates a definition of the given kind with no message or groups.
	pub fn new(kind: ConstraintKind) -> Self {
		Self {
			kind,
			message: None,
			groups: Vec::new(),
			attributes: BTreeMap::new(),
		}
	}

	pub fn not_null() -> Self {
		Self::new(ConstraintKind::NotNull)
	}

	pub fn null() -> Self {
		Self::new(ConstraintKind::Null)
	}

	pub fn not_empty() -> Self {
		Self::new(ConstraintKind::NotEmpty)
	}

	/// Length bounds; `min` and `max` are inclusive.
	pub fn size(min: usize, max: usize) -> Self {
		Self::new(ConstraintKind::Size { min, max })
	}

	pub fn min(value: i64) -> Self {
		Self::new(ConstraintKind::Min(value))
	}

	pub fn max(value: i64) -> Self {
		Self::new(ConstraintKind::Max(value))
	}

	/// Regular expression match. The expression is stored verbatim and is
	/// not compiled here.
	pub fn pattern(regex: impl Into<String>) -> Self {
		Self::new(ConstraintKind::Pattern(regex.into()))
	}

	/// User-defined constraint, e.g. `ConstraintDef::custom("Isbn")`.
	pub fn custom(name: impl Into<Arc<str>>) -> Self {
		Self::new(ConstraintKind::Custom(name.into()))
	}

	/// Overrides the violation message.
	pub fn message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Adds a validation group. Duplicates are ignored.
	pub fn group(mut self, group: impl Into<String>) -> Self {
		let group = group.into();
		if !self.groups.contains(&group) {
			self.groups.push(group);
		}
		self
	}

	/// Sets a named attribute, replacing any previous value.
	pub fn attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
		self.attributes.insert(key.into(), value.into());
		self
	}

	/// Returns the rule.
	pub fn kind(&self) -> &ConstraintKind {
		&self.kind
	}

	/// Returns the short name of the rule (`"NotNull"`, `"Size"`, or the
	/// custom name).
	pub fn name(&self) -> &str {
		match &self.kind {
			ConstraintKind::NotNull => "NotNull",
			ConstraintKind::Null => "Null",
			ConstraintKind::NotEmpty => "NotEmpty",
			ConstraintKind::Size { .. } => "Size",
			ConstraintKind::Min(_) => "Min",
			ConstraintKind::Max(_) => "Max",
			ConstraintKind::Pattern(_) => "Pattern",
			ConstraintKind::Custom(name) => name.as_ref(),
		}
	}

	pub fn message_override(&self) -> Option<&str> {
		self.message.as_deref()
	}

	/// Returns the groups in insertion order; empty means the default group.
	pub fn groups(&self) -> &[String] {
		&self.groups
	}

	pub fn attributes(&self) -> &BTreeMap<String, AttributeValue> {
		&self.attributes
	}
}

impl fmt::Display for ConstraintDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.kind {
			ConstraintKind::Size { min, max } => write!(f, "Size({min}..={max})"),
			ConstraintKind::Min(v) => write!(f, "Min({v})"),
			ConstraintKind::Max(v) => write!(f, "Max({v})"),
			ConstraintKind::Pattern(re) => write!(f, "Pattern({re:?})"),
			_ => f.write_str(self.name()),
		}
	}
}
