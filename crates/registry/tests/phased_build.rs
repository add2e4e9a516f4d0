//! End-to-end builds over both phases.

use std::sync::Arc;

use phasekit_registry::{
	Accessor, CreationError, Factory, InitPhase, ProcessorConfig, Qualifier, Recorder, RegistrationContext, RegistryCell,
	RegistryRecorder, SyntheticDescriptor, SyntheticProcessor, suppliers,
};
use pretty_assertions::assert_eq;

fn init_tracing() {
	let _ = tracing_subscriber::fmt::try_init();
}

fn fresh_recorder() -> RegistryRecorder {
	RegistryRecorder::new(Box::leak(Box::new(RegistryCell::new())))
}

fn foo_descriptors() -> Vec<SyntheticDescriptor> {
	vec![
		SyntheticDescriptor::configure("org.acme.Foo").static_init().value(42_i32),
		SyntheticDescriptor::configure("org.acme.Foo")
			.qualifier(Qualifier::named("red"))
			.runtime_init()
			.supplier(Factory::from_fn(|| String::from("bar"))),
	]
}

#[test]
fn early_value_and_late_supplier() {
	init_tracing();
	let recorder = fresh_recorder();
	let descriptors = foo_descriptors();
	let processor = SyntheticProcessor::default();
	let mut ctx = RegistrationContext::new();

	let early = processor.init_static(&recorder, &descriptors, &mut ctx).unwrap();
	assert_eq!((early.processed, early.slots), (1, 1));

	let a = ctx.get(descriptors[0].slot_key().as_str()).unwrap().clone();
	assert_eq!(*a.create_as::<i32>().unwrap(), 42);

	// No definition for B until the late pass; probe its slot directly.
	let b_key = descriptors[1].slot_key();
	assert!(ctx.get(b_key.as_str()).is_none());
	let b_accessor = Accessor::emit(b_key.clone(), InitPhase::RuntimeInit, recorder.supplier_cell());
	let err = b_accessor.create().unwrap_err();
	assert_eq!(
		err,
		CreationError::NotInitialized {
			key: b_key.clone(),
			phase: InitPhase::RuntimeInit,
		}
	);

	let late = processor.init_runtime(&recorder, &descriptors, &mut ctx).unwrap();
	assert_eq!((late.processed, late.slots), (1, 1));

	let b = ctx.get(b_key.as_str()).unwrap();
	assert_eq!(b.phase(), InitPhase::RuntimeInit);
	assert_eq!(*b.create_as::<String>().unwrap(), "bar");
	assert_eq!(*b_accessor.create_as::<String>().unwrap(), "bar");
	assert_eq!(*a.create_as::<i32>().unwrap(), 42);
}

#[test]
fn phase_snapshots_are_disjoint() {
	let recorder = fresh_recorder();
	let descriptors = foo_descriptors();
	let processor = SyntheticProcessor::default();
	let mut ctx = RegistrationContext::new();
	processor.init_static(&recorder, &descriptors, &mut ctx).unwrap();
	processor.init_runtime(&recorder, &descriptors, &mut ctx).unwrap();

	let registry = recorder.supplier_cell().load();
	assert!(registry.is_complete());
	let early = registry.snapshot(InitPhase::StaticInit).unwrap();
	let late = registry.snapshot(InitPhase::RuntimeInit).unwrap();

	assert!(early.contains(descriptors[0].slot_key().as_str()));
	assert!(!late.contains(descriptors[0].slot_key().as_str()));
	assert!(late.contains(descriptors[1].slot_key().as_str()));
	assert!(!early.contains(descriptors[1].slot_key().as_str()));
}

#[test]
fn identical_builds_behave_identically() {
	let run = || {
		let recorder = fresh_recorder();
		let descriptors = foo_descriptors();
		let processor = SyntheticProcessor::new(ProcessorConfig::default());
		let mut ctx = RegistrationContext::new();
		processor.init_static(&recorder, &descriptors, &mut ctx).unwrap();
		processor.init_runtime(&recorder, &descriptors, &mut ctx).unwrap();
		ctx
	};
	let first = run();
	let second = run();

	let keys = |ctx: &RegistrationContext| {
		ctx.definitions()
			.iter()
			.map(|d| (d.slot_key().clone(), d.phase()))
			.collect::<Vec<_>>()
	};
	assert_eq!(keys(&first), keys(&second));

	for (a, b) in first.definitions().iter().zip(second.definitions()) {
		match a.phase() {
			InitPhase::StaticInit => {
				assert_eq!(*a.create_as::<i32>().unwrap(), *b.create_as::<i32>().unwrap());
			}
			InitPhase::RuntimeInit => {
				assert_eq!(*a.create_as::<String>().unwrap(), *b.create_as::<String>().unwrap());
			}
		}
	}
}

#[test]
fn accessors_resolve_from_many_threads() {
	let recorder = fresh_recorder();
	let descriptors: Vec<_> = (0..32)
		.map(|i| {
			SyntheticDescriptor::configure(format!("org.acme.Worker{i}"))
				.runtime_init()
				.value(i as u64)
		})
		.collect();
	let mut ctx = RegistrationContext::new();
	SyntheticProcessor::default()
		.init_runtime(&recorder, &descriptors, &mut ctx)
		.unwrap();

	let definitions = Arc::new(ctx.definitions().to_vec());
	let handles: Vec<_> = (0..8)
		.map(|_| {
			let definitions = Arc::clone(&definitions);
			std::thread::spawn(move || {
				for (i, def) in definitions.iter().enumerate() {
					assert_eq!(*def.create_as::<u64>().unwrap(), i as u64);
				}
			})
		})
		.collect();
	for h in handles {
		h.join().unwrap();
	}
}

#[test]
fn global_cell_restarts_per_build() {
	init_tracing();
	let recorder = RegistryRecorder::global();
	let descriptors = foo_descriptors();
	let processor = SyntheticProcessor::default();

	for _ in 0..2 {
		suppliers().begin_build();
		let mut ctx = RegistrationContext::new();
		processor.init_static(&recorder, &descriptors, &mut ctx).unwrap();
		processor.init_runtime(&recorder, &descriptors, &mut ctx).unwrap();
		assert!(suppliers().load().is_complete());
		assert_eq!(*ctx.definitions()[0].create_as::<i32>().unwrap(), 42);
	}
}
