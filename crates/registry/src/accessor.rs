//! Generated accessors.
//!
//! An [`Accessor`] is the creation routine attached to a synthetic
//! component's definition. It is emitted once per descriptor with the slot key
//! and phase baked in, and only ever consults the supplier cell it was emitted
//! against.

use std::any::Any;
use std::sync::Arc;

use phasekit_registry_spec::InitPhase;

use crate::core::{CreationError, Instance, RegistryCell, SlotKey};

#[derive(Debug, Clone)]
pub struct Accessor {
	key: SlotKey,
	phase: InitPhase,
	cell: &'static RegistryCell,
}

impl Accessor {
	/// Emits the accessor for `key`, reading `phase`'s snapshot in `cell`.
	pub fn emit(key: SlotKey, phase: InitPhase, cell: &'static RegistryCell) -> Self {
		Self { key, phase, cell }
	}

	pub fn key(&self) -> &SlotKey {
		&self.key
	}

	pub fn phase(&self) -> InitPhase {
		self.phase
	}

	/// Resolves the slot and invokes its factory.
	pub fn create(&self) -> Result<Instance, CreationError> {
		let Some(factory) = self.cell.lookup(self.phase, self.key.as_str()) else {
			tracing::error!(key = %self.key, phase = %self.phase, "synthetic component accessed before its suppliers were installed");
			return Err(CreationError::NotInitialized {
				key: self.key.clone(),
				phase: self.phase,
			});
		};
		Ok(factory.get())
	}

	/// [`Accessor::create`] downcast to `T`.
	pub fn create_as<T: Any + Send + Sync>(&self) -> Result<Arc<T>, CreationError> {
		self.create()?.downcast::<T>().map_err(|_| CreationError::TypeMismatch {
			key: self.key.clone(),
			expected: std::any::type_name::<T>(),
		})
	}
}
