//! Processor configuration.
//!
//! Loaded from TOML:
//!
//! ```toml
//! duplicate-policy = "last-wins"   # or "first-wins", "reject"
//! ```
//!
//! Every key is optional; an empty document yields [`ProcessorConfig::default`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// How a pass treats two descriptors that resolve to the same slot key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
	/// Overwrite with the last definition seen (idempotent redefinition).
	#[default]
	LastWins,
	/// Keep the first definition seen for a key.
	FirstWins,
	/// Fail the pass.
	Reject,
}

impl core::fmt::Display for DuplicatePolicy {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::LastWins => write!(f, "last-wins"),
			Self::FirstWins => write!(f, "first-wins"),
			Self::Reject => write!(f, "reject"),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ProcessorConfig {
	pub duplicate_policy: DuplicatePolicy,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid processor config: {0}")]
	Parse(#[from] toml::de::Error),
}

impl ProcessorConfig {
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(input)?)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&input)
	}

	pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.duplicate_policy = policy;
		self
	}
}
