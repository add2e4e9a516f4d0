use serde::{Deserialize, Serialize};

/// Lifecycle phase in which a synthetic component's backing instance becomes
/// available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InitPhase {
	/// Early bootstrap phase; the instance is known while the application is
	/// still being assembled.
	StaticInit,
	/// Late phase; the instance only exists once the application is starting.
	RuntimeInit,
}

impl InitPhase {
	/// Both phases in installation order.
	pub const ALL: [InitPhase; 2] = [InitPhase::StaticInit, InitPhase::RuntimeInit];

	/// The phase this one must stay disjoint from.
	pub const fn other(self) -> Self {
		match self {
			Self::StaticInit => Self::RuntimeInit,
			Self::RuntimeInit => Self::StaticInit,
		}
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::StaticInit => "static-init",
			Self::RuntimeInit => "runtime-init",
		}
	}
}

impl core::fmt::Display for InitPhase {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.as_str())
	}
}
