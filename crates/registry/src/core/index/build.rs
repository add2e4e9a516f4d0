use phasekit_registry_spec::{DuplicatePolicy, InitPhase};
use rustc_hash::FxHashMap as HashMap;

use super::collision::{Collision, InsertAction, Resolution};
use super::snapshot::{PhaseSnapshot, SnapshotEntry};
use crate::core::{Factory, RegistrationError, SlotKey};

/// Working mapping for one phase pass.
///
/// Owned exclusively by the pass that fills it; nothing is visible to
/// readers until [`SnapshotBuilder::build`] hands the result to an install
/// call.
pub struct SnapshotBuilder {
	phase: InitPhase,
	policy: DuplicatePolicy,
	entries: HashMap<SlotKey, SnapshotEntry>,
	order: Vec<SlotKey>,
	collisions: Vec<Collision>,
	next_ordinal: usize,
}

impl SnapshotBuilder {
	pub fn new(phase: InitPhase) -> Self {
		Self {
			phase,
			policy: DuplicatePolicy::default(),
			entries: HashMap::default(),
			order: Vec::new(),
			collisions: Vec::new(),
			next_ordinal: 0,
		}
	}

	/// Sets the duplicate key handling policy.
	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Binds `factory` to `key`, resolving a same-pass collision with the
	/// configured policy.
	pub fn insert(&mut self, key: SlotKey, factory: Factory) -> Result<InsertAction, RegistrationError> {
		let ordinal = self.next_ordinal;
		self.next_ordinal += 1;

		let Some(existing) = self.entries.get_mut(&key) else {
			tracing::debug!(phase = %self.phase, key = %key, "synthetic slot registered");
			self.order.push(key.clone());
			self.entries.insert(key, SnapshotEntry { factory, ordinal });
			return Ok(InsertAction::InsertedNew);
		};

		let resolution = match self.policy {
			DuplicatePolicy::LastWins => Resolution::ReplacedExisting,
			DuplicatePolicy::FirstWins => Resolution::KeptExisting,
			DuplicatePolicy::Reject => {
				return Err(RegistrationError::DuplicateSlot { key, phase: self.phase });
			}
		};

		let collision = Collision {
			key,
			phase: self.phase,
			existing: existing.ordinal,
			incoming: ordinal,
			policy: self.policy,
			resolution,
		};
		tracing::warn!(%collision, "synthetic slot redefined");

		let action = match resolution {
			Resolution::ReplacedExisting => {
				*existing = SnapshotEntry { factory, ordinal };
				InsertAction::ReplacedExisting
			}
			Resolution::KeptExisting => InsertAction::KeptExisting,
		};
		self.collisions.push(collision);
		Ok(action)
	}

	pub fn build(self) -> PhaseSnapshot {
		PhaseSnapshot {
			phase: self.phase,
			entries: self.entries,
			order: self.order.into(),
			collisions: self.collisions.into(),
		}
	}
}
