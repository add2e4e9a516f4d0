use phasekit_registry_spec::InitPhase;

use crate::core::SyntheticDescriptor;

/// Descriptors belonging to `phase`, in their original relative order.
pub fn partition(
	descriptors: &[SyntheticDescriptor],
	phase: InitPhase,
) -> impl Iterator<Item = &SyntheticDescriptor> + '_ {
	descriptors.iter().filter(move |d| d.init_phase() == phase)
}
