use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Membrane variants a cell can be built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembraneType {
    #[default]
    Single,
    Double,
    Cellulose,
    Chitin,
    CalciumCarbonate,
    Silica,
}

impl MembraneType {
    pub const ALL: [MembraneType; 6] = [
        MembraneType::Single,
        MembraneType::Double,
        MembraneType::Cellulose,
        MembraneType::Chitin,
        MembraneType::CalciumCarbonate,
        MembraneType::Silica,
    ];

    /// Multiplier applied to the membrane-derived base movement force.
    #[must_use]
    pub fn movement_factor(&self) -> f32 {
        match self {
            MembraneType::Single => 1.0,
            MembraneType::Double => 0.9,
            MembraneType::Cellulose => 0.5,
            MembraneType::Chitin => 0.4,
            MembraneType::CalciumCarbonate => 0.3,
            MembraneType::Silica => 0.25,
        }
    }

    #[must_use]
    pub fn has_cell_wall(&self) -> bool {
        !matches!(self, MembraneType::Single | MembraneType::Double)
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            MembraneType::Single => "single",
            MembraneType::Double => "double",
            MembraneType::Cellulose => "cellulose",
            MembraneType::Chitin => "chitin",
            MembraneType::CalciumCarbonate => "calcium_carbonate",
            MembraneType::Silica => "silica",
        }
    }
}

impl fmt::Display for MembraneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for MembraneType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MembraneType::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Unknown membrane type: {s}"))
    }
}

/// Rigidity is bounded to `[-1, 1]`; positive values stiffen the membrane.
pub const MIN_RIGIDITY: f32 = -1.0;
pub const MAX_RIGIDITY: f32 = 1.0;

/// Membrane choice plus rigidity for one calculation call.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MembraneConfig {
    pub membrane_type: MembraneType,
    pub rigidity: f32,
}

impl MembraneConfig {
    /// Creates a membrane configuration, clamping rigidity into its valid range.
    #[must_use]
    pub fn new(membrane_type: MembraneType, rigidity: f32) -> Self {
        let rigidity = if rigidity.is_finite() {
            rigidity.clamp(MIN_RIGIDITY, MAX_RIGIDITY)
        } else {
            0.0
        };
        Self {
            membrane_type,
            rigidity,
        }
    }
}
