//! Slot key derivation.
//!
//! A slot key is `<type name with separators replaced by '_'>_<sha256(qualifiers)>`.
//! The digest is hex-encoded and always [`DIGEST_HEX_LEN`] characters long.
//!
//! Both `.` and `::` map to `_`, so `acme.Foo`, `acme::Foo` and `acme_Foo`
//! name the same slot. Type names are expected to follow one convention per
//! build; the qualifier digest alone keeps qualified variants apart.

use std::sync::Arc;

use phasekit_registry_spec::{QualifierSet, TypeName};
use sha2::{Digest, Sha256};

/// Length of the hex digest suffix.
pub const DIGEST_HEX_LEN: usize = 64;

/// Registry slot identifier shared by a staged registry entry and the
/// accessor that reads it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey(Arc<str>);

impl SlotKey {
	/// Derives a key from a canonical type name and a rendered qualifier string.
	pub fn derive(type_name: &str, qualifiers: &str) -> Self {
		let mut key = normalize_type_name(type_name);
		key.reserve(1 + DIGEST_HEX_LEN);
		key.push('_');
		key.push_str(&hex::encode(Sha256::digest(qualifiers.as_bytes())));
		Self(Arc::from(key))
	}

	pub fn of(impl_type: &TypeName, qualifiers: &QualifierSet) -> Self {
		Self::derive(impl_type.as_str(), &qualifiers.to_string())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

}

impl core::fmt::Display for SlotKey {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(&self.0)
	}
}

impl core::borrow::Borrow<str> for SlotKey {
	fn borrow(&self) -> &str {
		&self.0
	}
}

/// Replaces `::` and `.` namespace separators with `_`.
pub fn normalize_type_name(type_name: &str) -> String {
	type_name.replace("::", "_").replace('.', "_")
}
