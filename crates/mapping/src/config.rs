//! Session configuration.
//!
//! ```toml
//! parameter-index-check = "eager"
//! ```

use serde::{Deserialize, Serialize};

use crate::Result;

/// How a parameter context treats an index beyond the method's arity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterIndexCheck {
	/// Accept the index and log a warning. Consumers of the mapping see the
	/// declaration as recorded.
	#[default]
	Unchecked,
	/// Fail construction with [`MappingError::ParameterIndexOutOfRange`].
	///
	/// [`MappingError::ParameterIndexOutOfRange`]: crate::MappingError::ParameterIndexOutOfRange
	Eager,
}

/// Options shared by every context of a [`MappingSession`](crate::MappingSession).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct MappingConfig {
	/// Parameter index range checking.
	pub parameter_index_check: ParameterIndexCheck,
}

impl MappingConfig {
	/// Returns a config that rejects out-of-range parameter indices.
	pub fn eager() -> Self {
		Self {
			parameter_index_check: ParameterIndexCheck::Eager,
		}
	}

	/// Parses a config from TOML; missing keys take their defaults.
	///
	/// # Errors
	///
	/// Returns [`MappingError::Config`](crate::MappingError::Config) on
	/// malformed input or unknown keys.
	pub fn from_toml(src: &str) -> Result<Self> {
		Ok(toml::from_str(src)?)
	}
}
