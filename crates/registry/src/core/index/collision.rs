//! Collision vocabulary for same-pass slot conflicts.

use phasekit_registry_spec::{DuplicatePolicy, InitPhase};

use crate::core::SlotKey;

/// Result of a successful slot insertion.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertAction {
	/// Key was new.
	InsertedNew,
	/// Key existed; kept the existing factory (policy chose existing).
	KeptExisting,
	/// Key existed; replaced with the incoming factory (policy chose incoming).
	ReplacedExisting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
	KeptExisting,
	ReplacedExisting,
}

/// Two descriptors of one pass resolved to the same slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
	pub key: SlotKey,
	pub phase: InitPhase,
	/// Ingest ordinal of the binding that held the slot.
	pub existing: usize,
	/// Ingest ordinal of the conflicting binding.
	pub incoming: usize,
	pub policy: DuplicatePolicy,
	pub resolution: Resolution,
}

impl core::fmt::Display for Collision {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		let verb = match self.resolution {
			Resolution::KeptExisting => "kept",
			Resolution::ReplacedExisting => "replaced",
		};
		write!(
			f,
			"{} slot {}: #{} {} by #{} ({})",
			self.phase, self.key, self.existing, verb, self.incoming, self.policy
		)
	}
}
