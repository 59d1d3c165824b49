use crate::config::{HexConfig, ShapeConfig};
use crate::geometry::axial_to_cartesian;
use cytoform_data::{Hex, MembraneType, PlacedOrganelle};
use glam::Vec2;
use std::f32::consts::TAU;

/// Content address of a layout's footprint: the sorted set of occupied hexes.
///
/// Two layouts with the same footprint share a membrane regardless of which
/// organelles fill the hexes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayoutSignature(Vec<Hex>);

impl LayoutSignature {
    #[must_use]
    pub fn from_organelles(organelles: &[PlacedOrganelle]) -> Self {
        let mut hexes: Vec<Hex> = organelles
            .iter()
            .flat_map(PlacedOrganelle::occupied_hexes)
            .collect();
        hexes.sort_unstable();
        hexes.dedup();
        Self(hexes)
    }

    #[must_use]
    pub fn hexes(&self) -> &[Hex] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Closed counter-clockwise boundary polygon in the x/z plane.
#[derive(Debug, Clone, PartialEq)]
pub struct MembraneShape {
    pub vertices: Vec<Vec2>,
}

impl MembraneShape {
    /// Wraps the footprint in a convex membrane.
    ///
    /// For each of `membrane_resolution` evenly spaced directions the hex
    /// center furthest along it is pushed outwards by the padding, tracing
    /// the hull of the footprint inflated by a disc. Walled membranes get a
    /// thicker padding. An empty footprint yields a padding-sized disc.
    #[must_use]
    pub fn generate(
        signature: &LayoutSignature,
        membrane: MembraneType,
        hex: &HexConfig,
        shape: &ShapeConfig,
    ) -> Self {
        let mut centers: Vec<Vec2> = signature
            .hexes()
            .iter()
            .map(|h| axial_to_cartesian(*h, hex))
            .collect();
        if centers.is_empty() {
            centers.push(Vec2::ZERO);
        }

        let padding = if membrane.has_cell_wall() {
            shape.membrane_padding * shape.cell_wall_padding_multiplier
        } else {
            shape.membrane_padding
        };

        let resolution = shape.membrane_resolution.max(3);
        let vertices = (0..resolution)
            .map(|i| {
                let angle = TAU * i as f32 / resolution as f32;
                let dir = Vec2::new(angle.cos(), angle.sin());
                let mut support = centers[0];
                let mut best = support.dot(dir);
                for c in &centers[1..] {
                    let d = c.dot(dir);
                    if d > best {
                        best = d;
                        support = *c;
                    }
                }
                support + dir * padding
            })
            .collect();

        Self { vertices }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| *v * factor).collect(),
        }
    }

    /// Largest distance of a vertex from the origin.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.length())
            .fold(0.0, f32::max)
    }
}
