//! Phase passes over synthetic descriptors.
//!
//! Both passes run the same procedure, [`SyntheticProcessor::run_phase`],
//! differing only in the phase they select:
//!
//! 1. partition the descriptors by phase (stable),
//! 2. derive each slot key and bind its factory into a fresh working mapping,
//! 3. install the mapping through the [`Recorder`] in one call,
//! 4. attach an accessor for each surviving binding to its definition.
//!
//! A pass that fails before step 3 installs nothing. A slot key bound by the
//! other phase, either in `ctx` or in its installed snapshot, fails the pass.

mod partition;

pub use partition::partition;
use phasekit_registry_spec::{InitPhase, ProcessorConfig};

use crate::accessor::Accessor;
use crate::core::{
	Collision, Factory, InsertAction, InstanceSource, RegistrationError, SlotKey, SnapshotBuilder, SyntheticDescriptor,
};
use crate::definition::RegistrationContext;
use crate::recorder::Recorder;

/// Outcome of one phase pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseReport {
	pub phase: InitPhase,
	/// Descriptors routed to this phase.
	pub processed: usize,
	/// Distinct slots installed.
	pub slots: usize,
	pub collisions: Vec<Collision>,
}

#[derive(Debug, Clone, Default)]
pub struct SyntheticProcessor {
	config: ProcessorConfig,
}

impl SyntheticProcessor {
	pub fn new(config: ProcessorConfig) -> Self {
		Self { config }
	}

	/// Early pass: installs static-init suppliers.
	pub fn init_static<R: Recorder + ?Sized>(
		&self,
		recorder: &R,
		descriptors: &[SyntheticDescriptor],
		ctx: &mut RegistrationContext,
	) -> Result<PhaseReport, RegistrationError> {
		self.run_phase(InitPhase::StaticInit, recorder, descriptors, ctx)
	}

	/// Late pass: installs runtime-init suppliers.
	pub fn init_runtime<R: Recorder + ?Sized>(
		&self,
		recorder: &R,
		descriptors: &[SyntheticDescriptor],
		ctx: &mut RegistrationContext,
	) -> Result<PhaseReport, RegistrationError> {
		self.run_phase(InitPhase::RuntimeInit, recorder, descriptors, ctx)
	}

	pub fn run_phase<R: Recorder + ?Sized>(
		&self,
		phase: InitPhase,
		recorder: &R,
		descriptors: &[SyntheticDescriptor],
		ctx: &mut RegistrationContext,
	) -> Result<PhaseReport, RegistrationError> {
		let mut builder = SnapshotBuilder::new(phase).duplicate_policy(self.config.duplicate_policy);
		let registry = recorder.supplier_cell().load();
		let other = registry.snapshot(phase.other());
		let mut bound: Vec<(&SyntheticDescriptor, SlotKey)> = Vec::new();
		let mut processed = 0;

		for descriptor in partition(descriptors, phase) {
			processed += 1;
			let factory = resolve_factory(recorder, descriptor)?;
			let key = descriptor.slot_key();
			let existing = match ctx.phase_of(key.as_str()) {
				Some(existing) if existing != phase => Some(existing),
				_ => other.filter(|s| s.contains(key.as_str())).map(|s| s.phase()),
			};
			if let Some(existing) = existing {
				return Err(RegistrationError::CrossPhaseSlot {
					key,
					existing,
					incoming: phase,
				});
			}
			match builder.insert(key.clone(), factory)? {
				InsertAction::InsertedNew | InsertAction::ReplacedExisting => bound.push((descriptor, key)),
				InsertAction::KeptExisting => {}
			}
		}

		let snapshot = recorder.init_suppliers(builder.build())?;

		let cell = recorder.supplier_cell();
		for (descriptor, key) in bound {
			ctx.configure(descriptor.impl_type().clone())
				.read(descriptor)
				.creator(Accessor::emit(key, phase, cell))
				.done()?;
		}

		tracing::debug!(%phase, processed, slots = snapshot.len(), "synthetic phase processed");
		Ok(PhaseReport {
			phase,
			processed,
			slots: snapshot.len(),
			collisions: snapshot.collisions().to_vec(),
		})
	}
}

fn resolve_factory<R: Recorder + ?Sized>(
	recorder: &R,
	descriptor: &SyntheticDescriptor,
) -> Result<Factory, RegistrationError> {
	match descriptor.source() {
		Some(InstanceSource::Value(value)) => Ok(recorder.create_supplier(value.clone())),
		Some(InstanceSource::Supplier(factory)) => Ok(factory.clone()),
		None => Err(RegistrationError::MissingInstance {
			impl_type: descriptor.impl_type().clone(),
		}),
	}
}
