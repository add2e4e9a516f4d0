use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Annotation-like qualifying value attached to a component.
///
/// Rendered as `@Name` or `@Name(key = "value", ...)`. Member values are
/// always quoted and escaped. Names and member keys are written bare when
/// they are plain identifiers and quoted otherwise, so every token ends
/// unambiguously and distinct qualifiers never share a rendering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Qualifier {
	pub name: Box<str>,
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub members: BTreeMap<Box<str>, Box<str>>,
}

impl Qualifier {
	/// Marker qualifier without members.
	pub fn marker(name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			members: BTreeMap::new(),
		}
	}

	/// `@Named(value = "...")`.
	pub fn named(value: impl Into<Box<str>>) -> Self {
		Self::marker("Named").with_member("value", value)
	}

	pub fn with_member(mut self, key: impl Into<Box<str>>, value: impl Into<Box<str>>) -> Self {
		self.members.insert(key.into(), value.into());
		self
	}
}

impl core::fmt::Display for Qualifier {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str("@")?;
		write_ident(f, &self.name)?;
		if self.members.is_empty() {
			return Ok(());
		}
		f.write_str("(")?;
		for (i, (key, value)) in self.members.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write_ident(f, key)?;
			write!(f, " = {value:?}")?;
		}
		f.write_str(")")
	}
}

/// Identifier characters: ASCII alphanumerics plus `_`, `$` and `.`.
fn is_plain_ident(s: &str) -> bool {
	!s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'$' | b'.'))
}

fn write_ident(f: &mut core::fmt::Formatter<'_>, s: &str) -> core::fmt::Result {
	if is_plain_ident(s) {
		f.write_str(s)
	} else {
		write!(f, "{s:?}")
	}
}

/// Ordered, de-duplicated set of qualifiers.
///
/// Ordering makes the rendering independent of declaration order, so the
/// same qualifiers always yield the same slot key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualifierSet(BTreeSet<Qualifier>);

impl QualifierSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns true if the qualifier was not already present.
	pub fn insert(&mut self, qualifier: Qualifier) -> bool {
		self.0.insert(qualifier)
	}

	pub fn contains(&self, qualifier: &Qualifier) -> bool {
		self.0.contains(qualifier)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl FromIterator<Qualifier> for QualifierSet {
	fn from_iter<I: IntoIterator<Item = Qualifier>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl Extend<Qualifier> for QualifierSet {
	fn extend<I: IntoIterator<Item = Qualifier>>(&mut self, iter: I) {
		self.0.extend(iter);
	}
}

impl core::fmt::Display for QualifierSet {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str("[")?;
		for (i, q) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{q}")?;
		}
		f.write_str("]")
	}
}
