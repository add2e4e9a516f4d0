use std::sync::Arc;

use phasekit_registry_spec::{DuplicatePolicy, InitPhase};

use super::*;
use crate::core::{Factory, RegistrationError, SlotKey};

fn key(ty: &str) -> SlotKey {
	SlotKey::derive(ty, "[]")
}

fn value_of(factory: &Factory) -> i32 {
	*factory.get().downcast_ref::<i32>().expect("i32 instance")
}

#[test]
fn last_write_wins_by_default() {
	let mut builder = SnapshotBuilder::new(InitPhase::StaticInit);
	assert_eq!(builder.insert(key("Foo"), Factory::from_value(1)).unwrap(), InsertAction::InsertedNew);
	assert_eq!(builder.insert(key("Foo"), Factory::from_value(99)).unwrap(), InsertAction::ReplacedExisting);

	let snap = builder.build();
	assert_eq!(snap.len(), 1);
	assert_eq!(value_of(snap.get(key("Foo").as_str()).unwrap()), 99);

	let [collision] = snap.collisions() else {
		panic!("expected exactly one collision, got {:?}", snap.collisions());
	};
	assert_eq!(collision.existing, 0);
	assert_eq!(collision.incoming, 1);
	assert_eq!(collision.resolution, Resolution::ReplacedExisting);
	assert_eq!(collision.policy, DuplicatePolicy::LastWins);
}

#[test]
fn first_wins_keeps_original() {
	let mut builder = SnapshotBuilder::new(InitPhase::StaticInit).duplicate_policy(DuplicatePolicy::FirstWins);
	builder.insert(key("Foo"), Factory::from_value(1)).unwrap();
	assert_eq!(builder.insert(key("Foo"), Factory::from_value(99)).unwrap(), InsertAction::KeptExisting);

	let snap = builder.build();
	assert_eq!(value_of(snap.get(key("Foo").as_str()).unwrap()), 1);
	assert_eq!(snap.collisions()[0].resolution, Resolution::KeptExisting);
}

#[test]
fn reject_policy_fails_on_duplicate() {
	let mut builder = SnapshotBuilder::new(InitPhase::RuntimeInit).duplicate_policy(DuplicatePolicy::Reject);
	builder.insert(key("Foo"), Factory::from_value(1)).unwrap();
	let err = builder.insert(key("Foo"), Factory::from_value(2)).unwrap_err();
	assert_eq!(
		err,
		RegistrationError::DuplicateSlot {
			key: key("Foo"),
			phase: InitPhase::RuntimeInit,
		}
	);
}

#[test]
fn keys_keep_first_registration_order() {
	let mut builder = SnapshotBuilder::new(InitPhase::StaticInit);
	for ty in ["C", "A", "B", "A"] {
		builder.insert(key(ty), Factory::from_value(0)).unwrap();
	}
	let snap = builder.build();
	assert_eq!(snap.keys(), &[key("C"), key("A"), key("B")]);
}

#[test]
fn nothing_visible_before_install() {
	let registry = StagedRegistry::new();
	let mut builder = SnapshotBuilder::new(InitPhase::StaticInit);
	builder.insert(key("Foo"), Factory::from_value(42)).unwrap();

	assert!(!registry.is_installed(InitPhase::StaticInit));
	assert!(registry.lookup(InitPhase::StaticInit, key("Foo").as_str()).is_none());

	registry.install(builder.build()).unwrap();
	let factory = registry.lookup(InitPhase::StaticInit, key("Foo").as_str()).unwrap();
	assert_eq!(value_of(&factory), 42);
}

#[test]
fn second_install_is_rejected() {
	let registry = StagedRegistry::new();
	let first = registry.install(PhaseSnapshot::empty(InitPhase::RuntimeInit)).unwrap();

	let err = registry.install(PhaseSnapshot::empty(InitPhase::RuntimeInit)).unwrap_err();
	assert_eq!(err, RegistrationError::AlreadyInstalled { phase: InitPhase::RuntimeInit });
	assert!(Arc::ptr_eq(&first, registry.snapshot(InitPhase::RuntimeInit).unwrap()));
}

#[test]
fn phases_are_isolated() {
	let registry = StagedRegistry::new();
	let mut early = SnapshotBuilder::new(InitPhase::StaticInit);
	early.insert(key("Early"), Factory::from_value(1)).unwrap();
	let mut late = SnapshotBuilder::new(InitPhase::RuntimeInit);
	late.insert(key("Late"), Factory::from_value(2)).unwrap();

	registry.install(early.build()).unwrap();
	registry.install(late.build()).unwrap();
	assert!(registry.is_complete());

	assert!(registry.lookup(InitPhase::RuntimeInit, key("Early").as_str()).is_none());
	assert!(registry.lookup(InitPhase::StaticInit, key("Late").as_str()).is_none());
}

#[test]
fn begin_build_resets_both_phases() {
	let cell = RegistryCell::new();
	cell.install(PhaseSnapshot::empty(InitPhase::StaticInit)).unwrap();
	cell.install(PhaseSnapshot::empty(InitPhase::RuntimeInit)).unwrap();

	let previous = cell.begin_build();
	assert!(previous.is_complete());
	assert!(!cell.is_installed(InitPhase::StaticInit));
	assert!(!cell.is_installed(InitPhase::RuntimeInit));

	cell.install(PhaseSnapshot::empty(InitPhase::StaticInit)).unwrap();
}

#[test]
fn concurrent_reads_after_install() {
	let cell = Arc::new(RegistryCell::new());
	let mut builder = SnapshotBuilder::new(InitPhase::StaticInit);
	for i in 0..16 {
		builder.insert(key(&format!("T{i}")), Factory::from_value(i)).unwrap();
	}
	cell.install(builder.build()).unwrap();

	let handles: Vec<_> = (0..8)
		.map(|_| {
			let cell = Arc::clone(&cell);
			std::thread::spawn(move || {
				for i in 0..16 {
					let factory = cell.lookup(InitPhase::StaticInit, key(&format!("T{i}")).as_str()).unwrap();
					assert_eq!(value_of(&factory), i);
				}
			})
		})
		.collect();
	for h in handles {
		h.join().unwrap();
	}
}
