//! Cytoform: body plan evaluation for hex-grid cells.
//!
//! The calculations live in `cytoform_core`; this crate adds layout files
//! and report rendering for the `cytoform` binary.

pub mod app;
pub mod model;

pub use cytoform_core::{BodyCalculator, BodyStats, CalcConfig};
pub use model::layout::{LayoutError, LayoutFile};
