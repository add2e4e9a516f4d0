//! Shared registry infrastructure.

pub mod descriptor;
pub mod error;
pub mod factory;
pub mod index;
pub mod key;

pub use descriptor::{InstanceSource, SyntheticDescriptor};
pub use error::{CreationError, RegistrationError};
pub use factory::{Factory, Instance};
pub use index::{
	Collision, InsertAction, PhaseSnapshot, RegistryCell, Resolution, SnapshotBuilder, StagedRegistry, suppliers,
};
pub use key::SlotKey;
