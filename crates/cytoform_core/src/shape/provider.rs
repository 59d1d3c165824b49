use super::{
    FixedBody, LayoutSignature, MembraneShape, PhysicsShape, PolygonBody, ShapeCache,
    ShapeProvider,
};
use crate::config::{HexConfig, ShapeConfig};
use crate::error::{CalcError, Result};
use crate::metrics::ShapeMetricsSnapshot;
use cytoform_data::{MembraneType, PlacedOrganelle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MembraneKey {
    pub layout: LayoutSignature,
    pub membrane: MembraneType,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BodyKey {
    pub membrane: MembraneKey,
    /// `f32::to_bits` of the density, so equal densities share a body.
    pub density_bits: u32,
    pub is_bacteria: bool,
}

/// Builds membranes and bodies from layouts, caching both stages.
///
/// Membranes depend only on the footprint and membrane type, so a density
/// change reuses the cached polygon and only rebuilds the body. Each cache
/// holds at most `ShapeConfig::max_cached_shapes` entries.
#[derive(Debug)]
pub struct MembraneShapeProvider {
    hex: HexConfig,
    shape: ShapeConfig,
    membranes: ShapeCache<MembraneKey, MembraneShape>,
    bodies: ShapeCache<BodyKey, PolygonBody>,
}

impl Default for MembraneShapeProvider {
    fn default() -> Self {
        Self::new(HexConfig::default(), ShapeConfig::default())
    }
}

impl MembraneShapeProvider {
    #[must_use]
    pub fn new(hex: HexConfig, shape: ShapeConfig) -> Self {
        let capacity = shape.max_cached_shapes;
        Self {
            hex,
            shape,
            membranes: ShapeCache::with_capacity(capacity),
            bodies: ShapeCache::with_capacity(capacity),
        }
    }

    pub fn membrane(
        &self,
        organelles: &[PlacedOrganelle],
        membrane: MembraneType,
    ) -> Arc<MembraneShape> {
        let key = MembraneKey {
            layout: LayoutSignature::from_organelles(organelles),
            membrane,
        };
        self.membrane_for_key(&key)
    }

    fn membrane_for_key(&self, key: &MembraneKey) -> Arc<MembraneShape> {
        self.membranes.get_or_compute(key, || {
            let membrane = MembraneShape::generate(&key.layout, key.membrane, &self.hex, &self.shape);
            tracing::debug!(
                hexes = key.layout.hexes().len(),
                membrane = %key.membrane,
                radius = membrane.radius(),
                "Generated membrane"
            );
            membrane
        })
    }

    /// Drops every cached membrane and body built for `organelles`' footprint.
    pub fn invalidate_layout(&self, organelles: &[PlacedOrganelle]) -> usize {
        let layout = LayoutSignature::from_organelles(organelles);
        let membranes = self.membranes.invalidate_where(|k| k.layout == layout);
        let bodies = self.bodies.invalidate_where(|k| k.membrane.layout == layout);
        tracing::debug!(membranes, bodies, "Invalidated layout shapes");
        membranes + bodies
    }

    pub fn clear(&self) {
        self.membranes.clear();
        self.bodies.clear();
    }

    #[must_use]
    pub fn membrane_metrics(&self) -> ShapeMetricsSnapshot {
        self.membranes.metrics()
    }

    #[must_use]
    pub fn body_metrics(&self) -> ShapeMetricsSnapshot {
        self.bodies.metrics()
    }

    /// Number of cached membranes and bodies.
    #[must_use]
    pub fn cached(&self) -> (usize, usize) {
        (self.membranes.len(), self.bodies.len())
    }
}

impl ShapeProvider for MembraneShapeProvider {
    fn physics_shape(
        &self,
        organelles: &[PlacedOrganelle],
        membrane: MembraneType,
        density: f32,
        is_bacteria: bool,
    ) -> Result<Arc<dyn PhysicsShape>> {
        let key = BodyKey {
            membrane: MembraneKey {
                layout: LayoutSignature::from_organelles(organelles),
                membrane,
            },
            density_bits: density.to_bits(),
            is_bacteria,
        };

        let body = self.bodies.get_or_try_compute(&key, || {
            let outline = self.membrane_for_key(&key.membrane);
            let vertices = if is_bacteria {
                outline.scaled(self.shape.bacteria_scale).vertices
            } else {
                outline.vertices.clone()
            };
            let body = PolygonBody::from_polygon(&vertices, density, self.shape.body_thickness)
                .map_err(|e| e.with_context(format!("{membrane} membrane body")))?;
            tracing::debug!(
                mass = body.mass,
                area = body.area,
                is_bacteria,
                "Built cell body"
            );
            Ok::<_, CalcError>(body)
        })?;

        let shape: Arc<dyn PhysicsShape> = body;
        Ok(shape)
    }
}

/// Hands out one prebuilt body for every layout.
///
/// Lets callers pin mass and inertia to known values; also counts how often
/// it was asked.
#[derive(Debug)]
pub struct FixedShapeProvider {
    body: Arc<FixedBody>,
    requests: AtomicUsize,
}

impl FixedShapeProvider {
    #[must_use]
    pub fn new(body: FixedBody) -> Self {
        Self {
            body: Arc::new(body),
            requests: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }
}

impl ShapeProvider for FixedShapeProvider {
    fn physics_shape(
        &self,
        _organelles: &[PlacedOrganelle],
        _membrane: MembraneType,
        _density: f32,
        _is_bacteria: bool,
    ) -> Result<Arc<dyn PhysicsShape>> {
        self.requests.fetch_add(1, Ordering::Relaxed);
        let shape: Arc<dyn PhysicsShape> = self.body.clone();
        Ok(shape)
    }
}
