//! Body shapes: membrane polygons, collision bodies and the cached provider.
//!
//! Calculations only see the [`ShapeProvider`] and [`PhysicsShape`] traits;
//! [`MembraneShapeProvider`] is the stock implementation.

use crate::error::Result;
use cytoform_data::{MembraneType, PlacedOrganelle};
use glam::Vec3;
use std::sync::Arc;

pub mod body;
pub mod cache;
pub mod membrane;
pub mod provider;

pub use body::{FixedBody, PolygonBody};
pub use cache::ShapeCache;
pub use membrane::{LayoutSignature, MembraneShape};
pub use provider::{FixedShapeProvider, MembraneShapeProvider};

/// Mass and inertia queries of a built collision body.
pub trait PhysicsShape: Send + Sync + std::fmt::Debug {
    fn mass(&self) -> f32;

    /// Angular velocity gained from applying `torque` to the body at rest.
    fn torque_response(&self, torque: Vec3) -> Vec3;
}

/// Produces (and usually caches) the collision body of a layout.
pub trait ShapeProvider: Send + Sync {
    fn physics_shape(
        &self,
        organelles: &[PlacedOrganelle],
        membrane: MembraneType,
        density: f32,
        is_bacteria: bool,
    ) -> Result<Arc<dyn PhysicsShape>>;
}
