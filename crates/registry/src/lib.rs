//! Phased registry for synthetic components.
//!
//! Synthetic components are declared programmatically as
//! [`SyntheticDescriptor`]s. Each one names an implementation type, a set of
//! qualifiers, the [`InitPhase`] in which its instance becomes available, and
//! either a fixed value or a [`Factory`].
//!
//! A build runs two passes through [`SyntheticProcessor`]:
//!
//! - **static-init**: descriptors available during early bootstrap,
//! - **runtime-init**: descriptors whose instances only exist at startup.
//!
//! Each pass binds `SlotKey -> Factory` entries into a working mapping,
//! publishes it once through a [`Recorder`], and attaches an [`Accessor`] to
//! every resulting [`ComponentDefinition`]. Accessors read the phase snapshot
//! they were emitted for and fail with [`CreationError::NotInitialized`] when
//! invoked before that snapshot is installed.
//!
//! ```
//! use phasekit_registry::{
//! 	InitPhase, RegistrationContext, RegistryCell, RegistryRecorder, SyntheticDescriptor,
//! 	SyntheticProcessor,
//! };
//!
//! let cell: &'static RegistryCell = Box::leak(Box::new(RegistryCell::new()));
//! let recorder = RegistryRecorder::new(cell);
//! let descriptors = vec![SyntheticDescriptor::configure("org.acme.Answer").value(42_i32)];
//!
//! let mut ctx = RegistrationContext::new();
//! SyntheticProcessor::default().init_static(&recorder, &descriptors, &mut ctx)?;
//!
//! let def = &ctx.definitions()[0];
//! assert_eq!(def.phase(), InitPhase::StaticInit);
//! assert_eq!(*def.create_as::<i32>()?, 42);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod accessor;
pub mod core;
pub mod definition;
pub mod processor;
pub mod recorder;

pub use accessor::Accessor;
pub use crate::core::{
	Collision, CreationError, Factory, InsertAction, Instance, InstanceSource, PhaseSnapshot, RegistrationError,
	RegistryCell, Resolution, SlotKey, SnapshotBuilder, StagedRegistry, SyntheticDescriptor, suppliers,
};
pub use definition::{ComponentDefinition, DefinitionConfigurator, RegistrationContext};
pub use phasekit_registry_spec::{
	ConfigError, DuplicatePolicy, InitPhase, ProcessorConfig, Qualifier, QualifierSet, TypeName,
};
pub use processor::{PhaseReport, SyntheticProcessor, partition};
pub use recorder::{Recorder, RegistryRecorder};
