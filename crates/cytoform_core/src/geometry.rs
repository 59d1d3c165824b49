//! Hex grid to world-space conversions.
//!
//! Cells live in the horizontal x/z plane. Planar points are `Vec2(x, z)`;
//! `to_vec3` lifts them to `Vec3(x, 0, z)`.

use crate::config::HexConfig;
use cytoform_data::{Hex, PlacedOrganelle};
use glam::{Vec2, Vec3};

/// Canonical forward axis of a cell.
pub const FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);
pub const RIGHT: Vec3 = Vec3::new(1.0, 0.0, 0.0);
pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Planar center of a hex (flat-topped layout).
#[inline]
#[must_use]
pub fn axial_to_cartesian(hex: Hex, config: &HexConfig) -> Vec2 {
    let q = hex.q as f32;
    let r = hex.r as f32;
    let x = q * config.size * 3.0 / 2.0;
    let z = config.size * 3.0_f32.sqrt() * (r + q / 2.0);
    Vec2::new(x, z)
}

#[inline]
#[must_use]
pub fn to_vec3(v: Vec2) -> Vec3 {
    Vec3::new(v.x, 0.0, v.y)
}

/// Unit thrust direction of an organelle: from its position towards the origin.
///
/// An organelle sitting on the origin has no direction and yields `Vec3::ZERO`.
#[must_use]
pub fn organelle_direction(organelle: &PlacedOrganelle, config: &HexConfig) -> Vec3 {
    let origin = axial_to_cartesian(Hex::ORIGIN, config);
    let position = axial_to_cartesian(organelle.position, config);
    to_vec3(origin - position).normalize_or_zero()
}
