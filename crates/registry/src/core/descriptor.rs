use std::any::Any;

use phasekit_registry_spec::{InitPhase, Qualifier, QualifierSet, TypeName};

use super::factory::{Factory, Instance};
use super::key::SlotKey;

/// Where a synthetic component's instance comes from.
#[derive(Debug, Clone)]
pub enum InstanceSource {
	/// Precomputed value, wrapped into a factory at registration.
	Value(Instance),
	/// Caller-supplied factory, used as is.
	Supplier(Factory),
}

/// Declaration of one synthetic component.
///
/// Built once by the declaring extension and consumed by a single processor
/// pass. Setting a value replaces a previously set supplier and vice versa.
#[derive(Debug, Clone)]
pub struct SyntheticDescriptor {
	impl_type: TypeName,
	qualifiers: QualifierSet,
	phase: InitPhase,
	source: Option<InstanceSource>,
	name: Option<Box<str>>,
	scope: Option<TypeName>,
	exposed_types: Vec<TypeName>,
}

impl SyntheticDescriptor {
	/// Starts a static-init declaration for `impl_type`.
	pub fn configure(impl_type: impl Into<TypeName>) -> Self {
		Self {
			impl_type: impl_type.into(),
			qualifiers: QualifierSet::new(),
			phase: InitPhase::StaticInit,
			source: None,
			name: None,
			scope: None,
			exposed_types: Vec::new(),
		}
	}

	pub fn qualifier(mut self, qualifier: Qualifier) -> Self {
		self.qualifiers.insert(qualifier);
		self
	}

	pub fn qualifiers(mut self, qualifiers: impl IntoIterator<Item = Qualifier>) -> Self {
		self.qualifiers.extend(qualifiers);
		self
	}

	pub fn phase(mut self, phase: InitPhase) -> Self {
		self.phase = phase;
		self
	}

	pub fn static_init(self) -> Self {
		self.phase(InitPhase::StaticInit)
	}

	pub fn runtime_init(self) -> Self {
		self.phase(InitPhase::RuntimeInit)
	}

	pub fn value<T: Any + Send + Sync>(self, value: T) -> Self {
		self.instance(std::sync::Arc::new(value))
	}

	pub fn instance(mut self, instance: Instance) -> Self {
		self.source = Some(InstanceSource::Value(instance));
		self
	}

	pub fn supplier(mut self, factory: Factory) -> Self {
		self.source = Some(InstanceSource::Supplier(factory));
		self
	}

	pub fn named(mut self, name: impl Into<Box<str>>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn scope(mut self, scope: impl Into<TypeName>) -> Self {
		self.scope = Some(scope.into());
		self
	}

	pub fn exposes(mut self, ty: impl Into<TypeName>) -> Self {
		self.exposed_types.push(ty.into());
		self
	}

	pub fn impl_type(&self) -> &TypeName {
		&self.impl_type
	}

	pub fn qualifier_set(&self) -> &QualifierSet {
		&self.qualifiers
	}

	pub fn init_phase(&self) -> InitPhase {
		self.phase
	}

	pub fn source(&self) -> Option<&InstanceSource> {
		self.source.as_ref()
	}

	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	pub fn scope_type(&self) -> Option<&TypeName> {
		self.scope.as_ref()
	}

	pub fn exposed_types(&self) -> &[TypeName] {
		&self.exposed_types
	}

	pub fn slot_key(&self) -> SlotKey {
		SlotKey::of(&self.impl_type, &self.qualifiers)
	}
}
