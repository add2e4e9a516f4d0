//! Component definitions produced for synthetic descriptors.

use std::any::Any;
use std::sync::Arc;

use phasekit_registry_spec::{InitPhase, QualifierSet, TypeName};
use rustc_hash::FxHashMap as HashMap;

use crate::accessor::Accessor;
use crate::core::{CreationError, Instance, RegistrationError, SlotKey, SyntheticDescriptor};

/// Final definition of a synthetic component: its metadata plus the
/// generated creation routine.
#[derive(Debug, Clone)]
pub struct ComponentDefinition {
	impl_type: TypeName,
	qualifiers: QualifierSet,
	name: Option<Box<str>>,
	scope: Option<TypeName>,
	exposed_types: Vec<TypeName>,
	creator: Accessor,
}

impl ComponentDefinition {
	pub fn impl_type(&self) -> &TypeName {
		&self.impl_type
	}

	pub fn qualifiers(&self) -> &QualifierSet {
		&self.qualifiers
	}

	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	pub fn scope(&self) -> Option<&TypeName> {
		self.scope.as_ref()
	}

	/// Exposed types; the implementation type alone if none were declared.
	pub fn exposed_types(&self) -> &[TypeName] {
		if self.exposed_types.is_empty() {
			std::slice::from_ref(&self.impl_type)
		} else {
			&self.exposed_types
		}
	}

	pub fn slot_key(&self) -> &SlotKey {
		self.creator.key()
	}

	pub fn phase(&self) -> InitPhase {
		self.creator.phase()
	}

	pub fn creator(&self) -> &Accessor {
		&self.creator
	}

	pub fn create(&self) -> Result<Instance, CreationError> {
		self.creator.create()
	}

	pub fn create_as<T: Any + Send + Sync>(&self) -> Result<Arc<T>, CreationError> {
		self.creator.create_as()
	}
}

/// Collects component definitions, one per slot key.
#[derive(Debug, Default)]
pub struct RegistrationContext {
	definitions: Vec<ComponentDefinition>,
	by_key: HashMap<SlotKey, usize>,
}

impl RegistrationContext {
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts configuring a definition for `impl_type`.
	pub fn configure(&mut self, impl_type: impl Into<TypeName>) -> DefinitionConfigurator<'_> {
		DefinitionConfigurator {
			ctx: self,
			impl_type: impl_type.into(),
			qualifiers: QualifierSet::new(),
			name: None,
			scope: None,
			exposed_types: Vec::new(),
			creator: None,
		}
	}

	/// Definitions in first-registration order.
	pub fn definitions(&self) -> &[ComponentDefinition] {
		&self.definitions
	}

	pub fn get(&self, key: &str) -> Option<&ComponentDefinition> {
		self.by_key.get(key).map(|&i| &self.definitions[i])
	}

	/// Phase that owns `key`, if defined.
	pub fn phase_of(&self, key: &str) -> Option<InitPhase> {
		self.get(key).map(ComponentDefinition::phase)
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}

	fn commit(&mut self, def: ComponentDefinition) -> Result<&ComponentDefinition, RegistrationError> {
		let key = def.slot_key().clone();
		let idx = match self.by_key.get(&key) {
			Some(&idx) => {
				let existing = self.definitions[idx].phase();
				if existing != def.phase() {
					return Err(RegistrationError::CrossPhaseSlot {
						key,
						existing,
						incoming: def.phase(),
					});
				}
				self.definitions[idx] = def;
				idx
			}
			None => {
				self.definitions.push(def);
				let idx = self.definitions.len() - 1;
				self.by_key.insert(key, idx);
				idx
			}
		};
		Ok(&self.definitions[idx])
	}
}

/// Fluent builder returned by [`RegistrationContext::configure`].
pub struct DefinitionConfigurator<'a> {
	ctx: &'a mut RegistrationContext,
	impl_type: TypeName,
	qualifiers: QualifierSet,
	name: Option<Box<str>>,
	scope: Option<TypeName>,
	exposed_types: Vec<TypeName>,
	creator: Option<Accessor>,
}

impl<'a> DefinitionConfigurator<'a> {
	/// Copies qualifiers and pass-through metadata from `descriptor`.
	pub fn read(mut self, descriptor: &SyntheticDescriptor) -> Self {
		self.qualifiers = descriptor.qualifier_set().clone();
		self.name = descriptor.name().map(Box::from);
		self.scope = descriptor.scope_type().cloned();
		self.exposed_types = descriptor.exposed_types().to_vec();
		self
	}

	pub fn creator(mut self, accessor: Accessor) -> Self {
		self.creator = Some(accessor);
		self
	}

	/// Registers the definition, replacing an earlier one for the same slot
	/// in the same phase.
	pub fn done(self) -> Result<&'a ComponentDefinition, RegistrationError> {
		let Self {
			ctx,
			impl_type,
			qualifiers,
			name,
			scope,
			exposed_types,
			creator,
		} = self;
		let Some(creator) = creator else {
			return Err(RegistrationError::MissingCreator { impl_type });
		};
		ctx.commit(ComponentDefinition {
			impl_type,
			qualifiers,
			name,
			scope,
			exposed_types,
			creator,
		})
	}
}
