use super::PhysicsShape;
use crate::error::{CalcError, Result};
use glam::{Vec2, Vec3};

/// Inertia floor so a degenerate axis never divides by zero.
const MIN_INERTIA: f32 = 1e-8;

/// A membrane polygon extruded to `thickness` along the vertical axis.
///
/// Inertia is taken about the centroid along the grid axes, which are
/// treated as the principal axes.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonBody {
    pub area: f32,
    pub centroid: Vec2,
    pub mass: f32,
    /// Moments of inertia about the x, y (vertical) and z axes.
    pub inertia: Vec3,
}

impl PolygonBody {
    pub fn from_polygon(vertices: &[Vec2], density: f32, thickness: f32) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(CalcError::shape_generation(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        if !(density.is_finite() && density > 0.0) {
            return Err(CalcError::shape_generation(format!(
                "density must be positive, got {density}"
            )));
        }

        // Planar second moments about the origin via the shoelace terms.
        // `a` is the x axis and `b` the z axis of the cell plane.
        let mut twice_area = 0.0f32;
        let mut cx = 0.0f32;
        let mut cz = 0.0f32;
        let mut int_z2 = 0.0f32;
        let mut int_x2 = 0.0f32;
        for (i, a) in vertices.iter().enumerate() {
            let b = vertices[(i + 1) % vertices.len()];
            let cross = a.x * b.y - b.x * a.y;
            twice_area += cross;
            cx += (a.x + b.x) * cross;
            cz += (a.y + b.y) * cross;
            int_x2 += (a.x * a.x + a.x * b.x + b.x * b.x) * cross;
            int_z2 += (a.y * a.y + a.y * b.y + b.y * b.y) * cross;
        }

        let signed_area = twice_area * 0.5;
        if !signed_area.is_finite() || signed_area.abs() < f32::EPSILON {
            return Err(CalcError::shape_generation("polygon has no area"));
        }

        let centroid = Vec2::new(cx / (6.0 * signed_area), cz / (6.0 * signed_area));
        let sign = signed_area.signum();
        let area = signed_area.abs();
        let int_x2 = (int_x2 / 12.0 * sign - area * centroid.x * centroid.x).max(0.0);
        let int_z2 = (int_z2 / 12.0 * sign - area * centroid.y * centroid.y).max(0.0);

        let areal_density = density * thickness;
        let mass = areal_density * area;
        let slab = mass * thickness * thickness / 12.0;
        let inertia = Vec3::new(
            areal_density * int_z2 + slab,
            areal_density * (int_x2 + int_z2),
            areal_density * int_x2 + slab,
        );

        Ok(Self {
            area,
            centroid,
            mass,
            inertia,
        })
    }
}

impl PhysicsShape for PolygonBody {
    fn mass(&self) -> f32 {
        self.mass
    }

    fn torque_response(&self, torque: Vec3) -> Vec3 {
        torque / self.inertia.max(Vec3::splat(MIN_INERTIA))
    }
}

/// A body with explicitly given mass and inertia, for previews and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedBody {
    pub mass: f32,
    pub inertia: Vec3,
}

impl FixedBody {
    #[must_use]
    pub fn new(mass: f32, inertia: Vec3) -> Self {
        Self { mass, inertia }
    }
}

impl PhysicsShape for FixedBody {
    fn mass(&self) -> f32 {
        self.mass
    }

    fn torque_response(&self, torque: Vec3) -> Vec3 {
        torque / self.inertia.max(Vec3::splat(MIN_INERTIA))
    }
}
