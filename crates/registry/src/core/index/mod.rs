#![cfg_attr(doc, allow(rustdoc::private_intra_doc_links))]
//! Staged supplier index.
//!
//! # Mental Model
//!
//! 1. **Populate:** a phase pass fills a [`SnapshotBuilder`] (the working
//!    mapping). Same-pass collisions follow the configured
//!    [`phasekit_registry_spec::DuplicatePolicy`] and are recorded.
//! 2. **Install:** [`SnapshotBuilder::build`] yields an immutable
//!    [`PhaseSnapshot`], published once into a [`StagedRegistry`] slot.
//! 3. **Read:** generated accessors resolve their slot through the
//!    [`RegistryCell`], lock-free.
//!
//! # Invariants
//!
//! - Must install each phase at most once per build.
//!   - Enforced in: [`StagedRegistry::install`] (`OnceLock::set`).
//!   - Tested by: `tests::second_install_is_rejected`
//!
//! - Must not expose a partially populated mapping.
//!   - Enforced in: [`SnapshotBuilder`] is private to the pass until `build`.
//!   - Tested by: `tests::nothing_visible_before_install`
//!
//! - Must resolve same-pass collisions last-write-wins by default.
//!   - Enforced in: [`SnapshotBuilder::insert`].
//!   - Tested by: `tests::last_write_wins_by_default`

mod build;
mod collision;
mod runtime;
mod snapshot;

pub use build::SnapshotBuilder;
pub use collision::{Collision, InsertAction, Resolution};
pub use runtime::{RegistryCell, StagedRegistry, suppliers};
pub use snapshot::PhaseSnapshot;

#[cfg(test)]
mod tests;
