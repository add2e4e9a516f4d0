//! Immutable per-phase supplier snapshot.
//!
//! # Invariants
//!
//! - A snapshot is never mutated after [`super::SnapshotBuilder::build`]; the
//!   installed copy is shared behind an `Arc` and read without locking.

use std::sync::Arc;

use phasekit_registry_spec::InitPhase;
use rustc_hash::FxHashMap as HashMap;

use super::collision::Collision;
use crate::core::{Factory, SlotKey};

#[derive(Debug, Clone)]
pub(crate) struct SnapshotEntry {
	pub(crate) factory: Factory,
	pub(crate) ordinal: usize,
}

/// `SlotKey -> Factory` mapping for one phase.
#[derive(Debug)]
pub struct PhaseSnapshot {
	pub(crate) phase: InitPhase,
	pub(crate) entries: HashMap<SlotKey, SnapshotEntry>,
	/// Slots in first-registration order.
	pub(crate) order: Arc<[SlotKey]>,
	pub(crate) collisions: Arc<[Collision]>,
}

impl PhaseSnapshot {
	/// Empty snapshot for `phase`.
	pub fn empty(phase: InitPhase) -> Self {
		Self {
			phase,
			entries: HashMap::default(),
			order: Arc::from(Vec::new()),
			collisions: Arc::from(Vec::new()),
		}
	}

	pub fn phase(&self) -> InitPhase {
		self.phase
	}

	#[inline]
	pub fn get(&self, key: &str) -> Option<&Factory> {
		self.entries.get(key).map(|e| &e.factory)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Slot keys in first-registration order.
	pub fn keys(&self) -> &[SlotKey] {
		&self.order
	}

	/// Same-pass collisions recorded while building this snapshot.
	pub fn collisions(&self) -> &[Collision] {
		&self.collisions
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
