//! # Cytoform Data
//!
//! Plain data describing a cell body plan: hex coordinates, organelle
//! definitions and placements, membranes, compounds, enzymes and the live
//! compound bag. Nothing here performs body calculations.

pub mod data;

pub use data::compound::{Compound, Enzyme};
pub use data::hex::Hex;
pub use data::membrane::{MembraneConfig, MembraneType, MAX_RIGIDITY, MIN_RIGIDITY};
pub use data::organelle::{
    CellBlueprint, CustomUpgrade, MovementComponent, OrganelleComponents, OrganelleDefinition,
    OrganelleUpgrades, PlacedOrganelle, StorageComponent,
};
pub use data::registry::OrganelleRegistry;
pub use data::storage::CompoundBag;
