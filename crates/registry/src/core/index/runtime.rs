//! Staged registry and the process-wide cell generated accessors read.
//!
//! # Role
//!
//! [`StagedRegistry`] owns one publish-once slot per [`InitPhase`].
//! [`RegistryCell`] holds the current build's registry behind an `ArcSwap` so
//! a restarted build can start from empty slots without touching readers of
//! the previous one.
//!
//! # Invariants
//!
//! - Each phase is installed at most once per [`StagedRegistry`].
//! - Reads never lock: one atomic load of the current registry plus a
//!   `OnceLock::get`.

use std::sync::{Arc, LazyLock, OnceLock};

use arc_swap::ArcSwap;
use phasekit_registry_spec::InitPhase;

use super::snapshot::PhaseSnapshot;
use crate::core::{Factory, RegistrationError};

/// Two publish-once supplier snapshots, one per phase.
#[derive(Debug, Default)]
pub struct StagedRegistry {
	static_init: OnceLock<Arc<PhaseSnapshot>>,
	runtime_init: OnceLock<Arc<PhaseSnapshot>>,
}

impl StagedRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	fn slot(&self, phase: InitPhase) -> &OnceLock<Arc<PhaseSnapshot>> {
		match phase {
			InitPhase::StaticInit => &self.static_init,
			InitPhase::RuntimeInit => &self.runtime_init,
		}
	}

	/// Publishes `snapshot` as its phase's suppliers.
	///
	/// Fails with [`RegistrationError::AlreadyInstalled`] if that phase was
	/// already published; the first snapshot stays in place.
	pub fn install(&self, snapshot: PhaseSnapshot) -> Result<Arc<PhaseSnapshot>, RegistrationError> {
		let phase = snapshot.phase();
		let slots = snapshot.len();
		let snapshot = Arc::new(snapshot);
		self.slot(phase)
			.set(Arc::clone(&snapshot))
			.map_err(|_| RegistrationError::AlreadyInstalled { phase })?;
		tracing::info!(%phase, slots, "synthetic suppliers installed");
		Ok(snapshot)
	}

	pub fn snapshot(&self, phase: InitPhase) -> Option<&Arc<PhaseSnapshot>> {
		self.slot(phase).get()
	}

	pub fn is_installed(&self, phase: InitPhase) -> bool {
		self.slot(phase).get().is_some()
	}

	/// True once both phases are installed.
	pub fn is_complete(&self) -> bool {
		InitPhase::ALL.iter().all(|&p| self.is_installed(p))
	}

	#[inline]
	pub fn lookup(&self, phase: InitPhase, key: &str) -> Option<Factory> {
		self.snapshot(phase)?.get(key).cloned()
	}
}

/// Process-lifetime read path shared by all generated accessors.
pub struct RegistryCell {
	current: ArcSwap<StagedRegistry>,
}

impl RegistryCell {
	pub fn new() -> Self {
		Self {
			current: ArcSwap::from_pointee(StagedRegistry::new()),
		}
	}

	/// Registry of the current build.
	#[inline]
	pub fn load(&self) -> Arc<StagedRegistry> {
		self.current.load_full()
	}

	/// Starts a new build with empty phase slots and returns the previous
	/// build's registry.
	pub fn begin_build(&self) -> Arc<StagedRegistry> {
		let previous = self.current.swap(Arc::new(StagedRegistry::new()));
		tracing::debug!(complete = previous.is_complete(), "synthetic registry reset for new build");
		previous
	}

	pub fn install(&self, snapshot: PhaseSnapshot) -> Result<Arc<PhaseSnapshot>, RegistrationError> {
		self.current.load().install(snapshot)
	}

	#[inline]
	pub fn lookup(&self, phase: InitPhase, key: &str) -> Option<Factory> {
		self.current.load().lookup(phase, key)
	}

	pub fn is_installed(&self, phase: InitPhase) -> bool {
		self.current.load().is_installed(phase)
	}
}

impl Default for RegistryCell {
	fn default() -> Self {
		Self::new()
	}
}

impl core::fmt::Debug for RegistryCell {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		let current = self.current.load();
		f.debug_struct("RegistryCell")
			.field("static_init", &current.is_installed(InitPhase::StaticInit))
			.field("runtime_init", &current.is_installed(InitPhase::RuntimeInit))
			.finish()
	}
}

static SUPPLIERS: LazyLock<RegistryCell> = LazyLock::new(RegistryCell::new);

/// The process-wide supplier cell.
pub fn suppliers() -> &'static RegistryCell {
	&SUPPLIERS
}
