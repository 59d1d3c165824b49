//! Body plan files.
//!
//! A layout names organelles by registry id and places them on the grid:
//!
//! ```toml
//! membrane = "double"
//! rigidity = 0.2
//!
//! [[organelles]]
//! id = "vacuole"
//! q = 0
//! r = 0
//! specialized_for = "glucose"
//!
//! [[organelles]]
//! id = "flagellum"
//! q = 0
//! r = 1
//! ```

use cytoform_core::CalcError;
use cytoform_data::{
    CellBlueprint, Compound, Enzyme, Hex, MembraneConfig, MembraneType, OrganelleRegistry,
    OrganelleUpgrades, PlacedOrganelle,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Failed to read layout: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse layout: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{source} at ({q}, {r})")]
    UnknownOrganelle {
        #[source]
        source: CalcError,
        q: i32,
        r: i32,
    },

    #[error("Organelle '{id}' cannot take upgrade: {reason}")]
    InvalidUpgrade { id: String, reason: String },
}

/// One `[[organelles]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganelleEntry {
    pub id: String,
    pub q: i32,
    pub r: i32,
    #[serde(default)]
    pub orientation: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialized_for: Option<Compound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enzyme: Option<Enzyme>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutFile {
    #[serde(default)]
    pub membrane: MembraneType,
    #[serde(default)]
    pub rigidity: f32,
    #[serde(default)]
    pub is_bacteria: bool,
    #[serde(default)]
    pub organelles: Vec<OrganelleEntry>,
}

impl LayoutFile {
    pub fn from_toml(content: &str) -> Result<Self, LayoutError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Resolves organelle ids against `registry`.
    ///
    /// Overlapping placements are kept but logged; the calculations accept
    /// them as given.
    pub fn to_blueprint(&self, registry: &OrganelleRegistry) -> Result<CellBlueprint, LayoutError> {
        let mut organelles = Vec::with_capacity(self.organelles.len());

        for entry in &self.organelles {
            let definition = registry
                .get(&entry.id)
                .ok_or_else(|| LayoutError::UnknownOrganelle {
                    source: CalcError::unknown_organelle(&entry.id),
                    q: entry.q,
                    r: entry.r,
                })?;

            let upgrades = match (entry.specialized_for, entry.enzyme) {
                (Some(_), Some(_)) => {
                    return Err(LayoutError::InvalidUpgrade {
                        id: entry.id.clone(),
                        reason: "both storage specialization and enzyme given".to_string(),
                    })
                }
                (Some(compound), None) => {
                    if definition.storage_capacity().is_none() {
                        return Err(LayoutError::InvalidUpgrade {
                            id: entry.id.clone(),
                            reason: "not a storage organelle".to_string(),
                        });
                    }
                    Some(OrganelleUpgrades::specialized_storage(compound))
                }
                (None, Some(enzyme)) => {
                    if !definition.has_lysosome_component() {
                        return Err(LayoutError::InvalidUpgrade {
                            id: entry.id.clone(),
                            reason: "not a lysosome".to_string(),
                        });
                    }
                    Some(OrganelleUpgrades::enzyme(enzyme))
                }
                (None, None) => None,
            };

            let mut placed = PlacedOrganelle::new(definition, Hex::new(entry.q, entry.r))
                .with_orientation(entry.orientation);
            if let Some(upgrades) = upgrades {
                placed = placed.with_upgrades(upgrades);
            }
            organelles.push(placed);
        }

        let overlaps = overlapping_hexes(&organelles);
        if !overlaps.is_empty() {
            tracing::warn!(count = overlaps.len(), hexes = ?overlaps, "Layout has overlapping organelles");
        }

        Ok(CellBlueprint::new(
            organelles,
            MembraneConfig::new(self.membrane, self.rigidity),
        )
        .bacteria(self.is_bacteria))
    }
}

/// Hexes claimed by more than one organelle, sorted.
#[must_use]
pub fn overlapping_hexes(organelles: &[PlacedOrganelle]) -> Vec<Hex> {
    let mut claims: HashMap<Hex, usize> = HashMap::new();
    for hex in organelles.iter().flat_map(PlacedOrganelle::occupied_hexes) {
        *claims.entry(hex).or_insert(0) += 1;
    }
    let mut overlaps: Vec<Hex> = claims
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(hex, _)| hex)
        .collect();
    overlaps.sort_unstable();
    overlaps
}
