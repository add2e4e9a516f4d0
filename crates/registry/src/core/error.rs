use phasekit_registry_spec::{InitPhase, TypeName};

use super::key::SlotKey;

/// Failure raised by a generated accessor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreationError {
	/// The accessor ran before its phase snapshot held the slot.
	#[error("synthetic component instance not initialized yet: {key}")]
	NotInitialized { key: SlotKey, phase: InitPhase },
	/// The instance exists but is not of the requested type.
	#[error("synthetic component {key} is not a {expected}")]
	TypeMismatch { key: SlotKey, expected: &'static str },
}

/// Build-time registration failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
	/// Descriptor carries neither a value nor a supplier.
	#[error("synthetic component {impl_type} declares neither a value nor a supplier")]
	MissingInstance { impl_type: TypeName },
	/// Same-pass key collision under the `reject` policy.
	#[error("duplicate synthetic slot in {phase}: {key}")]
	DuplicateSlot { key: SlotKey, phase: InitPhase },
	/// Slot already defined by the other phase.
	#[error("slot {key} is registered in {existing} and cannot be redefined in {incoming}")]
	CrossPhaseSlot {
		key: SlotKey,
		existing: InitPhase,
		incoming: InitPhase,
	},
	/// Phase snapshot installed twice within one build.
	#[error("{phase} suppliers already installed")]
	AlreadyInstalled { phase: InitPhase },
	/// Snapshot handed to the wrong phase's install call.
	#[error("{actual} snapshot cannot be installed as {expected} suppliers")]
	PhaseMismatch { expected: InitPhase, actual: InitPhase },
	/// Component definition finished without a creation routine.
	#[error("component definition for {impl_type} has no creator")]
	MissingCreator { impl_type: TypeName },
}
