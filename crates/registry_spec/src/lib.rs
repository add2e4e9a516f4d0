//! Declaration schema for synthetic components.
//!
//! This crate holds the plain data the registry is driven by: type names,
//! qualifier sets, initialization phases and processor configuration. It has
//! no knowledge of factories or the staged registry itself, so declaration
//! tooling can depend on it without pulling in the runtime side.

pub mod config;
mod phase;
mod qualifier;
mod type_name;

pub use config::{ConfigError, DuplicatePolicy, ProcessorConfig};
pub use phase::InitPhase;
pub use qualifier::{Qualifier, QualifierSet};
pub use type_name::TypeName;
