//! Tuning parameters for the body calculations.
//!
//! Every constant the aggregators use lives here so different tunings can be
//! evaluated side by side. The structures map onto a `config.toml` file.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impl)
//! 2. `config.toml` file (overrides defaults, missing sections keep defaults)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [movement]
//! base_movement_force = 900.0
//! flagella_base_force = 60.0
//!
//! [rotation]
//! max_rotation = 8.0
//! min_rotation = 0.1
//!
//! [digestion]
//! baseline_enzyme = "lipase"
//!
//! [shape]
//! max_cached_shapes = 1024
//! ```

use serde::{Deserialize, Serialize};

/// Hex grid geometry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HexConfig {
    /// Distance from a hex center to its corners.
    pub size: f32,
}

impl Default for HexConfig {
    fn default() -> Self {
        Self { size: 0.75 }
    }
}

/// Linear movement forces.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MovementConfig {
    pub base_movement_force: f32,
    /// Force of a movement organelle with momentum 100.
    pub flagella_base_force: f32,
    pub membrane_rigidity_mobility_modifier: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            base_movement_force: 900.0,
            flagella_base_force: 60.0,
            membrane_rigidity_mobility_modifier: 0.1,
        }
    }
}

/// Rotation speed mapping. Higher rotation values mean slower turning.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RotationConfig {
    pub max_rotation: f32,
    pub min_rotation: f32,
    pub cilia_rotation_factor: f32,
    pub cilia_radius_factor_multiplier: f32,
    /// Magnitude of the test torque applied about the vertical axis.
    pub test_torque: f32,
    /// Scale applied to the preserved torque fraction before compression.
    pub fraction_scale: f32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            max_rotation: 8.0,
            min_rotation: 0.1,
            cilia_rotation_factor: 0.008,
            cilia_radius_factor_multiplier: 0.8,
            test_torque: 1000.0,
            fraction_scale: 1000.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DensityConfig {
    pub base_cell_density: f32,
    pub base_cell_density_volume: f32,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            base_cell_density: 1000.0,
            base_cell_density_volume: 1.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Bonus applied to storage redirected to a single compound.
    pub specialized_multiplier: f32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            specialized_multiplier: 2.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DigestionConfig {
    pub absorbing_per_second: f32,
    pub enzyme_speed_up_fraction: f32,
    pub base_absorption_yield: f32,
    pub enzyme_efficiency_buff_fraction: f32,
    pub efficiency_maximum: f32,
    /// Enzyme used by lysosomes without an enzyme upgrade.
    pub baseline_enzyme: String,
}

impl Default for DigestionConfig {
    fn default() -> Self {
        Self {
            absorbing_per_second: 1.0,
            enzyme_speed_up_fraction: 0.4,
            base_absorption_yield: 0.3,
            enzyme_efficiency_buff_fraction: 0.15,
            efficiency_maximum: 0.6,
            baseline_enzyme: "lipase".to_string(),
        }
    }
}

/// Membrane polygon and collision body generation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ShapeConfig {
    pub membrane_resolution: usize,
    pub membrane_padding: f32,
    pub cell_wall_padding_multiplier: f32,
    pub bacteria_scale: f32,
    pub body_thickness: f32,
    /// Lower bound used whenever a mass ends up in a denominator.
    pub min_body_mass: f32,
    /// Entries each shape cache keeps before evicting the oldest.
    pub max_cached_shapes: usize,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            membrane_resolution: 48,
            membrane_padding: 0.75,
            cell_wall_padding_multiplier: 1.2,
            bacteria_scale: 0.5,
            body_thickness: 1.0,
            min_body_mass: 1e-3,
            max_cached_shapes: 1024,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CalcConfig {
    pub hex: HexConfig,
    pub movement: MovementConfig,
    pub rotation: RotationConfig,
    pub density: DensityConfig,
    pub storage: StorageConfig,
    pub digestion: DigestionConfig,
    pub shape: ShapeConfig,
}

impl CalcConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.hex.size.is_finite() && self.hex.size > 0.0,
            "Hex size must be positive"
        );

        anyhow::ensure!(
            self.movement.base_movement_force >= 0.0,
            "Base movement force must be non-negative"
        );
        anyhow::ensure!(
            self.movement.flagella_base_force >= 0.0,
            "Flagella base force must be non-negative"
        );

        anyhow::ensure!(
            self.rotation.min_rotation > 0.0,
            "Min rotation must be positive"
        );
        anyhow::ensure!(
            self.rotation.max_rotation >= self.rotation.min_rotation,
            "Max rotation must not be below min rotation"
        );
        anyhow::ensure!(
            self.rotation.test_torque > 0.0,
            "Test torque must be positive"
        );
        anyhow::ensure!(
            self.rotation.cilia_rotation_factor >= 0.0
                && self.rotation.cilia_radius_factor_multiplier >= 0.0,
            "Cilia factors must be non-negative"
        );

        anyhow::ensure!(
            self.density.base_cell_density > 0.0,
            "Base cell density must be positive"
        );
        anyhow::ensure!(
            self.density.base_cell_density_volume > 0.0,
            "Base cell density volume must be positive"
        );

        anyhow::ensure!(
            self.storage.specialized_multiplier >= 0.0,
            "Specialized storage multiplier must be non-negative"
        );

        anyhow::ensure!(
            self.digestion.absorbing_per_second >= 0.0,
            "Absorbing rate must be non-negative"
        );
        anyhow::ensure!(
            self.digestion.efficiency_maximum >= 0.0 && self.digestion.efficiency_maximum <= 1.0,
            "Digestion efficiency maximum must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.digestion
                .baseline_enzyme
                .parse::<cytoform_data::Enzyme>()
                .is_ok(),
            "Unknown baseline enzyme '{}'",
            self.digestion.baseline_enzyme
        );

        anyhow::ensure!(
            self.shape.membrane_resolution >= 3,
            "Membrane resolution must be at least 3"
        );
        anyhow::ensure!(
            self.shape.membrane_resolution <= 4096,
            "Membrane resolution too large (max 4096)"
        );
        anyhow::ensure!(
            self.shape.membrane_padding > 0.0,
            "Membrane padding must be positive"
        );
        anyhow::ensure!(
            self.shape.bacteria_scale > 0.0,
            "Bacteria scale must be positive"
        );
        anyhow::ensure!(
            self.shape.body_thickness > 0.0,
            "Body thickness must be positive"
        );
        anyhow::ensure!(
            self.shape.min_body_mass > 0.0,
            "Min body mass must be positive"
        );
        anyhow::ensure!(
            self.shape.max_cached_shapes > 0,
            "Shape cache capacity must be positive"
        );

        Ok(())
    }

    /// Parses and validates configuration from TOML content.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.hex).as_bytes());
        hasher.update(format!("{:?}", self.movement).as_bytes());
        hasher.update(format!("{:?}", self.rotation).as_bytes());
        hasher.update(format!("{:?}", self.density).as_bytes());
        hasher.update(format!("{:?}", self.storage).as_bytes());
        hasher.update(format!("{:?}", self.digestion).as_bytes());
        hasher.update(format!("{:?}", self.shape).as_bytes());
        hex::encode(hasher.finalize())
    }
}
