use super::compound::Compound;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Live compound storage of a spawned cell.
///
/// Every compound shares `nominal_capacity` unless it has an entry in the
/// specific capacity table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompoundBag {
    pub nominal_capacity: f32,
    specific_capacities: HashMap<Compound, f32>,
    amounts: HashMap<Compound, f32>,
}

impl CompoundBag {
    #[must_use]
    pub fn new(nominal_capacity: f32) -> Self {
        Self {
            nominal_capacity,
            ..Default::default()
        }
    }

    pub fn clear_specific_capacities(&mut self) {
        self.specific_capacities.clear();
    }

    /// Adds capacity dedicated to one compound.
    ///
    /// The first entry for a compound is seeded with the nominal capacity so a
    /// specialized store never holds less than generic storage would.
    pub fn add_specific_capacity_for_compound(&mut self, compound: Compound, capacity: f32) {
        let nominal = self.nominal_capacity;
        self.specific_capacities
            .entry(compound)
            .and_modify(|c| *c += capacity)
            .or_insert(capacity + nominal);
    }

    #[must_use]
    pub fn specific_capacities(&self) -> &HashMap<Compound, f32> {
        &self.specific_capacities
    }

    #[must_use]
    pub fn capacity_for(&self, compound: Compound) -> f32 {
        self.specific_capacities
            .get(&compound)
            .copied()
            .unwrap_or(self.nominal_capacity)
    }

    #[must_use]
    pub fn amount(&self, compound: Compound) -> f32 {
        self.amounts.get(&compound).copied().unwrap_or(0.0)
    }

    /// Stores up to the free capacity and returns the amount actually added.
    pub fn add_compound(&mut self, compound: Compound, amount: f32) -> f32 {
        if amount <= 0.0 {
            return 0.0;
        }
        let capacity = self.capacity_for(compound);
        let current = self.amounts.entry(compound).or_insert(0.0);
        let added = amount.min((capacity - *current).max(0.0));
        *current += added;
        added
    }

    /// Removes up to `amount` and returns what was taken.
    pub fn take_compound(&mut self, compound: Compound, amount: f32) -> f32 {
        let Some(current) = self.amounts.get_mut(&compound) else {
            return 0.0;
        };
        let taken = amount.max(0.0).min(*current);
        *current -= taken;
        taken
    }
}
