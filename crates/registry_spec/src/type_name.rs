use serde::{Deserialize, Serialize};

/// Fully-qualified name of a component implementation type.
///
/// Both `.` (`org.acme.Foo`) and `::` (`acme::config::Foo`) are accepted as
/// namespace separators. Slot keys do not distinguish them, nor `_`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(Box<str>);

impl TypeName {
	pub fn new(name: impl Into<Box<str>>) -> Self {
		Self(name.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl core::fmt::Display for TypeName {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for TypeName {
	fn from(v: &str) -> Self {
		Self::new(v)
	}
}

impl From<String> for TypeName {
	fn from(v: String) -> Self {
		Self::new(v)
	}
}
