//! Registration calls that publish phase snapshots.

use std::sync::Arc;

use phasekit_registry_spec::InitPhase;

use crate::core::{Factory, Instance, PhaseSnapshot, RegistrationError, RegistryCell, suppliers};

/// The two phase registration calls plus the cell accessors read from.
///
/// Each `init_*` call is the single operation that makes a phase's
/// suppliers visible; it must run before the first accessor of that phase.
pub trait Recorder {
	/// Cell that accessors emitted against this recorder read.
	fn supplier_cell(&self) -> &'static RegistryCell;

	/// Wraps a fixed value into a factory.
	fn create_supplier(&self, value: Instance) -> Factory {
		Factory::from_instance(value)
	}

	fn init_static_suppliers(&self, snapshot: PhaseSnapshot) -> Result<Arc<PhaseSnapshot>, RegistrationError>;

	fn init_runtime_suppliers(&self, snapshot: PhaseSnapshot) -> Result<Arc<PhaseSnapshot>, RegistrationError>;

	/// Dispatches to the registration call for `snapshot`'s phase.
	fn init_suppliers(&self, snapshot: PhaseSnapshot) -> Result<Arc<PhaseSnapshot>, RegistrationError> {
		match snapshot.phase() {
			InitPhase::StaticInit => self.init_static_suppliers(snapshot),
			InitPhase::RuntimeInit => self.init_runtime_suppliers(snapshot),
		}
	}
}

/// Recorder installing straight into a [`RegistryCell`].
#[derive(Debug, Clone, Copy)]
pub struct RegistryRecorder {
	cell: &'static RegistryCell,
}

impl RegistryRecorder {
	pub fn new(cell: &'static RegistryCell) -> Self {
		Self { cell }
	}

	/// Recorder bound to the process-wide cell.
	pub fn global() -> Self {
		Self::new(suppliers())
	}

	fn install_as(&self, expected: InitPhase, snapshot: PhaseSnapshot) -> Result<Arc<PhaseSnapshot>, RegistrationError> {
		if snapshot.phase() != expected {
			return Err(RegistrationError::PhaseMismatch {
				expected,
				actual: snapshot.phase(),
			});
		}
		self.cell.install(snapshot)
	}
}

impl Default for RegistryRecorder {
	fn default() -> Self {
		Self::global()
	}
}

impl Recorder for RegistryRecorder {
	fn supplier_cell(&self) -> &'static RegistryCell {
		self.cell
	}

	fn init_static_suppliers(&self, snapshot: PhaseSnapshot) -> Result<Arc<PhaseSnapshot>, RegistrationError> {
		self.install_as(InitPhase::StaticInit, snapshot)
	}

	fn init_runtime_suppliers(&self, snapshot: PhaseSnapshot) -> Result<Arc<PhaseSnapshot>, RegistrationError> {
		self.install_as(InitPhase::RuntimeInit, snapshot)
	}
}
