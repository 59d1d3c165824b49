//! Engulfment digestion rates derived from lysosome enzymes.

use crate::config::DigestionConfig;
use cytoform_data::{Enzyme, OrganelleUpgrades, PlacedOrganelle};
use std::collections::HashMap;

/// Compound absorption rate with `enzyme_count` digestive organelles.
#[must_use]
pub fn digestion_speed(enzyme_count: usize, config: &DigestionConfig) -> f32 {
    let amount = config.absorbing_per_second;
    let buff = amount * config.enzyme_speed_up_fraction * enzyme_count as f32;
    amount + buff
}

/// Share of an engulfed compound that is absorbed, capped at the maximum.
#[must_use]
pub fn digestion_efficiency(enzyme_count: usize, config: &DigestionConfig) -> f32 {
    let absorption = config.base_absorption_yield;
    let buff = absorption * config.enzyme_efficiency_buff_fraction * enzyme_count as f32;
    (absorption + buff).clamp(0.0, config.efficiency_maximum)
}

#[must_use]
pub fn total_digestion_speed(organelles: &[PlacedOrganelle], config: &DigestionConfig) -> f32 {
    let count = organelles
        .iter()
        .filter(|o| o.definition.has_lysosome_component())
        .count();
    digestion_speed(count, config)
}

/// Efficiency per enzyme present in the layout.
///
/// `baseline` is used by lysosomes without an enzyme upgrade and is always
/// present in the result.
#[must_use]
pub fn digestion_efficiencies(
    organelles: &[PlacedOrganelle],
    baseline: Enzyme,
    config: &DigestionConfig,
) -> HashMap<Enzyme, f32> {
    let mut counts: HashMap<Enzyme, usize> = HashMap::new();

    for organelle in organelles {
        if !organelle.definition.has_lysosome_component() {
            continue;
        }
        let enzyme = organelle
            .upgrades
            .as_ref()
            .and_then(OrganelleUpgrades::lysosome_enzyme)
            .unwrap_or(baseline);
        *counts.entry(enzyme).or_insert(0) += 1;
    }

    let mut result = HashMap::with_capacity(counts.len() + 1);
    result.insert(baseline, digestion_efficiency(0, config));
    for (enzyme, count) in counts {
        result.insert(enzyme, digestion_efficiency(count, config));
    }
    result
}
