use super::compound::{Compound, Enzyme};
use super::hex::Hex;
use super::membrane::MembraneConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

fn default_density() -> f32 {
    1000.0
}

fn default_density_volume() -> f32 {
    1.0
}

fn default_hexes() -> Vec<Hex> {
    vec![Hex::ORIGIN]
}

/// Thrust-producing component (flagella and similar).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementComponent {
    pub momentum: f32,
    #[serde(default)]
    pub torque: f32,
}

/// Generic compound storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StorageComponent {
    pub capacity: f32,
}

/// Capability set of an organelle definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganelleComponents {
    #[serde(default)]
    pub movement: Option<MovementComponent>,
    #[serde(default)]
    pub storage: Option<StorageComponent>,
    #[serde(default)]
    pub cilia: bool,
    #[serde(default)]
    pub lysosome: bool,
}

/// Immutable template shared by every placed instance of an organelle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganelleDefinition {
    pub id: String,
    pub name: String,
    #[serde(default = "default_density")]
    pub density: f32,
    /// Weight of this organelle in the cell's average density.
    #[serde(default = "default_density_volume")]
    pub relative_density_volume: f32,
    /// Footprint relative to the organelle position, before rotation.
    #[serde(default = "default_hexes")]
    pub hexes: Vec<Hex>,
    #[serde(default)]
    pub components: OrganelleComponents,
}

impl OrganelleDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            density: default_density(),
            relative_density_volume: default_density_volume(),
            hexes: default_hexes(),
            components: OrganelleComponents::default(),
        }
    }

    #[must_use]
    pub fn with_density(mut self, density: f32, relative_volume: f32) -> Self {
        self.density = density;
        self.relative_density_volume = relative_volume;
        self
    }

    #[must_use]
    pub fn with_hexes(mut self, hexes: Vec<Hex>) -> Self {
        self.hexes = hexes;
        self
    }

    #[must_use]
    pub fn with_movement(mut self, momentum: f32, torque: f32) -> Self {
        self.components.movement = Some(MovementComponent { momentum, torque });
        self
    }

    #[must_use]
    pub fn with_storage(mut self, capacity: f32) -> Self {
        self.components.storage = Some(StorageComponent { capacity });
        self
    }

    #[must_use]
    pub fn with_cilia(mut self) -> Self {
        self.components.cilia = true;
        self
    }

    #[must_use]
    pub fn with_lysosome(mut self) -> Self {
        self.components.lysosome = true;
        self
    }

    #[must_use]
    pub fn has_movement_component(&self) -> bool {
        self.components.movement.is_some()
    }

    #[must_use]
    pub fn has_cilia_component(&self) -> bool {
        self.components.cilia
    }

    #[must_use]
    pub fn has_lysosome_component(&self) -> bool {
        self.components.lysosome
    }

    #[must_use]
    pub fn storage_capacity(&self) -> Option<f32> {
        self.components.storage.map(|s| s.capacity)
    }

    #[must_use]
    pub fn momentum(&self) -> f32 {
        self.components.movement.map_or(0.0, |m| m.momentum)
    }

    #[must_use]
    pub fn torque(&self) -> f32 {
        self.components.movement.map_or(0.0, |m| m.torque)
    }
}

/// Variant data attached to a placed organelle by an editor upgrade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CustomUpgrade {
    Storage { specialized_for: Option<Compound> },
    Lysosome { enzyme: Enzyme },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganelleUpgrades {
    #[serde(default)]
    pub custom: Option<CustomUpgrade>,
}

impl OrganelleUpgrades {
    #[must_use]
    pub fn specialized_storage(compound: Compound) -> Self {
        Self {
            custom: Some(CustomUpgrade::Storage {
                specialized_for: Some(compound),
            }),
        }
    }

    #[must_use]
    pub fn enzyme(enzyme: Enzyme) -> Self {
        Self {
            custom: Some(CustomUpgrade::Lysosome { enzyme }),
        }
    }

    #[must_use]
    pub fn storage_specialization(&self) -> Option<Compound> {
        match self.custom {
            Some(CustomUpgrade::Storage { specialized_for }) => specialized_for,
            _ => None,
        }
    }

    #[must_use]
    pub fn lysosome_enzyme(&self) -> Option<Enzyme> {
        match self.custom {
            Some(CustomUpgrade::Lysosome { enzyme }) => Some(enzyme),
            _ => None,
        }
    }
}

/// One organelle placed in a cell layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedOrganelle {
    pub definition: Arc<OrganelleDefinition>,
    #[serde(default)]
    pub upgrades: Option<OrganelleUpgrades>,
    pub position: Hex,
    /// Number of 60 degree turns.
    #[serde(default)]
    pub orientation: i32,
}

impl PlacedOrganelle {
    pub fn new(definition: Arc<OrganelleDefinition>, position: Hex) -> Self {
        Self {
            definition,
            upgrades: None,
            position,
            orientation: 0,
        }
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: i32) -> Self {
        self.orientation = orientation.rem_euclid(6);
        self
    }

    #[must_use]
    pub fn with_upgrades(mut self, upgrades: OrganelleUpgrades) -> Self {
        self.upgrades = Some(upgrades);
        self
    }

    /// Absolute hexes covered by this organelle.
    pub fn occupied_hexes(&self) -> impl Iterator<Item = Hex> + '_ {
        self.definition
            .hexes
            .iter()
            .map(move |h| h.rotate_axial(self.orientation) + self.position)
    }
}

/// A complete body plan handed to the calculators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellBlueprint {
    pub organelles: Vec<PlacedOrganelle>,
    pub membrane: MembraneConfig,
    #[serde(default)]
    pub is_bacteria: bool,
}

impl CellBlueprint {
    pub fn new(organelles: Vec<PlacedOrganelle>, membrane: MembraneConfig) -> Self {
        Self {
            organelles,
            membrane,
            is_bacteria: false,
        }
    }

    #[must_use]
    pub fn bacteria(mut self, is_bacteria: bool) -> Self {
        self.is_bacteria = is_bacteria;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupied_hexes_follow_orientation() {
        let def = Arc::new(
            OrganelleDefinition::new("long", "Long").with_hexes(vec![Hex::ORIGIN, Hex::new(0, 1)]),
        );
        let placed = PlacedOrganelle::new(def, Hex::new(2, 0)).with_orientation(3);
        let hexes: Vec<Hex> = placed.occupied_hexes().collect();
        assert_eq!(hexes, vec![Hex::new(2, 0), Hex::new(2, -1)]);
    }

    #[test]
    fn test_movement_accessors() {
        let flagellum = OrganelleDefinition::new("flagellum", "Flagellum").with_movement(20.0, 0.5);
        assert!(flagellum.has_movement_component());
        assert_eq!((flagellum.momentum(), flagellum.torque()), (20.0, 0.5));

        let plain = OrganelleDefinition::new("cytoplasm", "Cytoplasm");
        assert_eq!((plain.momentum(), plain.torque()), (0.0, 0.0));
    }

    #[test]
    fn test_upgrade_accessors() {
        let storage = OrganelleUpgrades::specialized_storage(Compound::Glucose);
        assert_eq!(storage.storage_specialization(), Some(Compound::Glucose));
        assert_eq!(storage.lysosome_enzyme(), None);

        let lysosome = OrganelleUpgrades::enzyme(Enzyme::Chitinase);
        assert_eq!(lysosome.lysosome_enzyme(), Some(Enzyme::Chitinase));
        assert_eq!(lysosome.storage_specialization(), None);
    }

    #[test]
    fn test_upgrade_toml_shape() {
        let upgrades: OrganelleUpgrades = toml::from_str(
            r#"
            [custom]
            kind = "storage"
            specialized_for = "iron"
            "#,
        )
        .unwrap();
        assert_eq!(upgrades.storage_specialization(), Some(Compound::Iron));
    }
}
