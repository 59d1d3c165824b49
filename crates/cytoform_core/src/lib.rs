//! # Cytoform Core
//!
//! Body calculations for modular cells built from organelles on a hex grid.
//!
//! This crate derives, from a body plan alone:
//! - Maximum speed direction and top linear speed
//! - Rotation speed (inverted scale, lower is faster)
//! - Average density and body mass
//! - Nominal and compound-specific storage capacity
//! - Digestion speed and per-enzyme efficiency
//!
//! ## Architecture
//!
//! The aggregators are free functions over borrowed organelle slices and an
//! explicit [`CalcConfig`]. Mass and inertia come from a [`shape::ShapeProvider`];
//! the stock [`shape::MembraneShapeProvider`] wraps the layout in a membrane
//! polygon, extrudes it and caches both stages with single-flight builds.
//! [`BodyCalculator`] bundles configuration and provider.
//!
//! ## Example
//!
//! ```
//! use cytoform_core::{BodyCalculator, CalcConfig};
//! use cytoform_data::{CellBlueprint, Hex, MembraneConfig, OrganelleRegistry, PlacedOrganelle};
//!
//! let registry = OrganelleRegistry::builtin();
//! let flagellum = registry.get("flagellum").unwrap();
//! let cytoplasm = registry.get("cytoplasm").unwrap();
//!
//! let blueprint = CellBlueprint::new(
//!     vec![
//!         PlacedOrganelle::new(cytoplasm, Hex::new(0, 0)),
//!         PlacedOrganelle::new(flagellum, Hex::new(0, 1)),
//!     ],
//!     MembraneConfig::default(),
//! );
//!
//! let calculator = BodyCalculator::with_default_shapes(CalcConfig::default()).unwrap();
//! let stats = calculator.summarize(&blueprint).unwrap();
//! assert!(stats.speed > 0.0);
//! ```

/// Facade bundling configuration and shape provider
pub mod calculator;
/// Nominal and specialized compound storage
pub mod capacity;
/// Configuration management for calculation parameters
pub mod config;
/// Lysosome digestion speed and efficiency
pub mod digestion;
pub mod error;
/// Hex grid to world-space conversions
pub mod geometry;
/// Speed, rotation and density
pub mod locomotion;
/// Shape cache metrics and structured logging
pub mod metrics;
/// Membrane polygons, bodies and the cached shape provider
pub mod shape;

pub use calculator::{BodyCalculator, BodyCalculatorBuilder, BodyStats};
pub use capacity::CapacitySpecialization;
pub use config::CalcConfig;
pub use error::{CalcError, Result};
pub use metrics::{init_logging, ShapeMetrics, ShapeMetricsSnapshot};
pub use shape::{MembraneShapeProvider, PhysicsShape, ShapeProvider};
