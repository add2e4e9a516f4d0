use std::any::Any;
use std::sync::Arc;

/// Type-erased component instance.
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Zero-argument callable producing a component instance.
///
/// Cheap to clone; clones share the same underlying callable.
#[derive(Clone)]
pub struct Factory(Arc<dyn Fn() -> Instance + Send + Sync>);

impl Factory {
	pub fn new<F>(f: F) -> Self
	where
		F: Fn() -> Instance + Send + Sync + 'static,
	{
		Self(Arc::new(f))
	}

	/// Factory whose callable returns a fresh `Arc` of the produced value on
	/// every call.
	pub fn from_fn<T, F>(f: F) -> Self
	where
		T: Any + Send + Sync,
		F: Fn() -> T + Send + Sync + 'static,
	{
		Self::new(move || Arc::new(f()) as Instance)
	}

	/// Factory that hands out the same instance on every call.
	pub fn from_instance(instance: Instance) -> Self {
		Self::new(move || Arc::clone(&instance))
	}

	/// Factory wrapping a fixed value.
	pub fn from_value<T: Any + Send + Sync>(value: T) -> Self {
		Self::from_instance(Arc::new(value))
	}

	pub fn get(&self) -> Instance {
		(self.0)()
	}
}

impl core::fmt::Debug for Factory {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str("Factory(..)")
	}
}
