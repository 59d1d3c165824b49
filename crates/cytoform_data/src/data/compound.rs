use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storable resources a cell can hold in its compound bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compound {
    Atp,
    Glucose,
    Ammonia,
    Phosphates,
    HydrogenSulfide,
    Iron,
    Oxytoxy,
    Mucilage,
}

impl Compound {
    pub const ALL: [Compound; 8] = [
        Compound::Atp,
        Compound::Glucose,
        Compound::Ammonia,
        Compound::Phosphates,
        Compound::HydrogenSulfide,
        Compound::Iron,
        Compound::Oxytoxy,
        Compound::Mucilage,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Compound::Atp => "atp",
            Compound::Glucose => "glucose",
            Compound::Ammonia => "ammonia",
            Compound::Phosphates => "phosphates",
            Compound::HydrogenSulfide => "hydrogen_sulfide",
            Compound::Iron => "iron",
            Compound::Oxytoxy => "oxytoxy",
            Compound::Mucilage => "mucilage",
        }
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Compound {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Compound::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Unknown compound: {s}"))
    }
}

/// Digestive enzymes carried by lysosome-type organelles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Enzyme {
    Lipase,
    Chitinase,
    Cellulase,
}

impl Enzyme {
    pub const ALL: [Enzyme; 3] = [Enzyme::Lipase, Enzyme::Chitinase, Enzyme::Cellulase];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Enzyme::Lipase => "lipase",
            Enzyme::Chitinase => "chitinase",
            Enzyme::Cellulase => "cellulase",
        }
    }
}

impl fmt::Display for Enzyme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Enzyme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Enzyme::ALL
            .iter()
            .copied()
            .find(|e| e.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Unknown enzyme: {s}"))
    }
}
