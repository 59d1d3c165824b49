//! Compound storage aggregation.
//!
//! Storage organelles contribute to a shared nominal capacity. An organelle
//! upgraded to specialize in one compound gives up its nominal share and
//! instead adds `capacity * specialized_multiplier` to that compound only.

use crate::config::StorageConfig;
use cytoform_data::{Compound, CompoundBag, OrganelleDefinition, OrganelleUpgrades, PlacedOrganelle};
use std::collections::HashMap;

/// Where an organelle's storage goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CapacitySpecialization {
    NoSpecialization,
    SpecializedFor {
        compound: Compound,
        extra_capacity: f32,
    },
}

/// Nominal (shared) capacity contributed by one organelle.
#[must_use]
pub fn nominal_capacity_for(
    definition: &OrganelleDefinition,
    upgrades: Option<&OrganelleUpgrades>,
) -> f32 {
    if upgrades.and_then(OrganelleUpgrades::storage_specialization).is_some() {
        return 0.0;
    }
    definition.storage_capacity().unwrap_or(0.0)
}

#[must_use]
pub fn specialization_for(
    definition: &OrganelleDefinition,
    upgrades: Option<&OrganelleUpgrades>,
    config: &StorageConfig,
) -> CapacitySpecialization {
    let Some(capacity) = definition.storage_capacity() else {
        return CapacitySpecialization::NoSpecialization;
    };

    match upgrades.and_then(OrganelleUpgrades::storage_specialization) {
        Some(compound) => CapacitySpecialization::SpecializedFor {
            compound,
            extra_capacity: capacity * config.specialized_multiplier,
        },
        None => CapacitySpecialization::NoSpecialization,
    }
}

#[must_use]
pub fn total_nominal_capacity(organelles: &[PlacedOrganelle]) -> f32 {
    organelles
        .iter()
        .map(|o| nominal_capacity_for(&o.definition, o.upgrades.as_ref()))
        .sum()
}

/// Per-compound capacity of every specialized compound in the layout.
///
/// The first organelle specialized for a compound seeds the entry with its
/// extra capacity plus the layout's whole nominal capacity; later ones only
/// add their extra capacity.
#[must_use]
pub fn total_specific_capacity(
    organelles: &[PlacedOrganelle],
    config: &StorageConfig,
) -> HashMap<Compound, f32> {
    let total_nominal = total_nominal_capacity(organelles);
    let mut capacities = HashMap::new();

    // Keep in sync with CompoundBag::add_specific_capacity_for_compound
    for organelle in organelles {
        if let CapacitySpecialization::SpecializedFor {
            compound,
            extra_capacity,
        } = specialization_for(&organelle.definition, organelle.upgrades.as_ref(), config)
        {
            capacities
                .entry(compound)
                .and_modify(|c| *c += extra_capacity)
                .or_insert(extra_capacity + total_nominal);
        }
    }

    capacities
}

/// Rebuilds the specific capacity table of a live bag.
///
/// `bag.nominal_capacity` must already be up to date; it is not touched here.
pub fn update_specific_capacities(
    bag: &mut CompoundBag,
    organelles: &[PlacedOrganelle],
    config: &StorageConfig,
) {
    bag.clear_specific_capacities();

    for organelle in organelles {
        if let CapacitySpecialization::SpecializedFor {
            compound,
            extra_capacity,
        } = specialization_for(&organelle.definition, organelle.upgrades.as_ref(), config)
        {
            bag.add_specific_capacity_for_compound(compound, extra_capacity);
        }
    }
}

/// Sum of all storage capacity, ignoring specialization upgrades.
#[must_use]
pub fn raw_storage_capacity(organelles: &[PlacedOrganelle]) -> f32 {
    organelles
        .iter()
        .filter_map(|o| o.definition.storage_capacity())
        .sum()
}
