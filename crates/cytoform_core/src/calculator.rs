//! One-stop entry point bundling configuration and the shape provider.

use crate::capacity;
use crate::config::CalcConfig;
use crate::digestion;
use crate::error::{CalcError, Result};
use crate::locomotion;
use crate::shape::{MembraneShapeProvider, ShapeProvider};
use cytoform_data::{CellBlueprint, Compound, CompoundBag, Enzyme, MembraneConfig, MembraneType, PlacedOrganelle};
use glam::Vec3;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Everything derived from one body plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyStats {
    pub speed: f32,
    pub rotation_speed: f32,
    /// `None` when the raw rotation speed has no display value.
    pub readable_rotation_speed: Option<f32>,
    pub average_density: f32,
    pub mass: f32,
    pub maximum_speed_direction: Vec3,
    pub nominal_capacity: f32,
    pub specific_capacity: HashMap<Compound, f32>,
    pub digestion_speed: f32,
    pub digestion_efficiencies: HashMap<Enzyme, f32>,
}

#[derive(Default)]
pub struct BodyCalculatorBuilder {
    config: Option<CalcConfig>,
    shapes: Option<Arc<dyn ShapeProvider>>,
}

impl BodyCalculatorBuilder {
    #[must_use]
    pub fn config(mut self, config: CalcConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn shape_provider(mut self, shapes: Arc<dyn ShapeProvider>) -> Self {
        self.shapes = Some(shapes);
        self
    }

    pub fn build(self) -> Result<BodyCalculator> {
        let config = self
            .config
            .ok_or(CalcError::MissingCollaborator("configuration"))?;
        let shapes = self
            .shapes
            .ok_or(CalcError::MissingCollaborator("shape provider"))?;

        config.validate()?;
        let baseline_enzyme = config
            .digestion
            .baseline_enzyme
            .parse::<Enzyme>()
            .map_err(|e| CalcError::invalid_config(e.to_string()))?;

        Ok(BodyCalculator {
            config,
            baseline_enzyme,
            shapes,
        })
    }
}

/// Validated configuration plus a shape provider.
///
/// Cheap to share between threads; all methods take `&self`.
#[derive(Clone)]
pub struct BodyCalculator {
    config: CalcConfig,
    baseline_enzyme: Enzyme,
    shapes: Arc<dyn ShapeProvider>,
}

impl std::fmt::Debug for BodyCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BodyCalculator")
            .field("config", &self.config)
            .field("baseline_enzyme", &self.baseline_enzyme)
            .finish_non_exhaustive()
    }
}

impl BodyCalculator {
    #[must_use]
    pub fn builder() -> BodyCalculatorBuilder {
        BodyCalculatorBuilder::default()
    }

    /// Calculator backed by a fresh [`MembraneShapeProvider`].
    pub fn with_default_shapes(config: CalcConfig) -> Result<Self> {
        let shapes = Arc::new(MembraneShapeProvider::new(
            config.hex.clone(),
            config.shape.clone(),
        ));
        Self::builder().config(config).shape_provider(shapes).build()
    }

    #[must_use]
    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    #[must_use]
    pub fn baseline_enzyme(&self) -> Enzyme {
        self.baseline_enzyme
    }

    #[must_use]
    pub fn shapes(&self) -> &Arc<dyn ShapeProvider> {
        &self.shapes
    }

    #[must_use]
    pub fn maximum_speed_direction(&self, organelles: &[PlacedOrganelle]) -> Vec3 {
        locomotion::maximum_speed_direction(organelles, &self.config.hex)
    }

    #[must_use]
    pub fn average_density(&self, organelles: &[PlacedOrganelle]) -> f32 {
        locomotion::calculate_average_density(organelles, &self.config.density)
    }

    pub fn speed(
        &self,
        organelles: &[PlacedOrganelle],
        membrane_type: MembraneType,
        membrane_rigidity: f32,
        is_bacteria: bool,
    ) -> Result<f32> {
        locomotion::calculate_speed(
            organelles,
            membrane_type,
            membrane_rigidity,
            is_bacteria,
            self.shapes.as_ref(),
            &self.config,
        )
    }

    pub fn rotation_speed(
        &self,
        organelles: &[PlacedOrganelle],
        membrane_type: MembraneType,
        is_bacteria: bool,
    ) -> Result<f32> {
        locomotion::calculate_rotation_speed(
            organelles,
            membrane_type,
            is_bacteria,
            self.shapes.as_ref(),
            &self.config,
        )
    }

    #[must_use]
    pub fn total_nominal_capacity(&self, organelles: &[PlacedOrganelle]) -> f32 {
        capacity::total_nominal_capacity(organelles)
    }

    #[must_use]
    pub fn total_specific_capacity(&self, organelles: &[PlacedOrganelle]) -> HashMap<Compound, f32> {
        capacity::total_specific_capacity(organelles, &self.config.storage)
    }

    /// Refreshes a live bag: nominal capacity first, then the specific table.
    pub fn update_storage(&self, bag: &mut CompoundBag, organelles: &[PlacedOrganelle]) {
        bag.nominal_capacity = capacity::total_nominal_capacity(organelles);
        capacity::update_specific_capacities(bag, organelles, &self.config.storage);
    }

    #[must_use]
    pub fn digestion_speed(&self, organelles: &[PlacedOrganelle]) -> f32 {
        digestion::total_digestion_speed(organelles, &self.config.digestion)
    }

    #[must_use]
    pub fn digestion_efficiencies(&self, organelles: &[PlacedOrganelle]) -> HashMap<Enzyme, f32> {
        digestion::digestion_efficiencies(organelles, self.baseline_enzyme, &self.config.digestion)
    }

    /// Evaluates a whole body plan, building its shape once.
    pub fn summarize(&self, blueprint: &CellBlueprint) -> Result<BodyStats> {
        let organelles = &blueprint.organelles;
        let membrane: &MembraneConfig = &blueprint.membrane;
        let density = self.average_density(organelles);

        let shape = self
            .shapes
            .physics_shape(organelles, membrane.membrane_type, density, blueprint.is_bacteria)
            .map_err(|e| e.with_context("summarizing body plan"))?;

        let speed = locomotion::calculate_speed_for_shape(organelles, membrane, shape.as_ref(), &self.config);
        let rotation_speed =
            locomotion::calculate_rotation_speed_for_shape(shape.as_ref(), organelles, &self.config);
        let readable_rotation_speed = locomotion::rotation_speed_to_user_readable_number(rotation_speed).ok();

        tracing::debug!(
            organelles = organelles.len(),
            membrane = %membrane.membrane_type,
            speed,
            rotation_speed,
            "Summarized body plan"
        );

        Ok(BodyStats {
            speed,
            rotation_speed,
            readable_rotation_speed,
            average_density: density,
            mass: locomotion::effective_mass(shape.as_ref(), &self.config.shape),
            maximum_speed_direction: self.maximum_speed_direction(organelles),
            nominal_capacity: self.total_nominal_capacity(organelles),
            specific_capacity: self.total_specific_capacity(organelles),
            digestion_speed: self.digestion_speed(organelles),
            digestion_efficiencies: self.digestion_efficiencies(organelles),
        })
    }

    /// Summarizes many body plans, in parallel when `rayon` is enabled.
    ///
    /// Results keep the input order.
    pub fn summarize_many(&self, blueprints: &[CellBlueprint]) -> Vec<Result<BodyStats>> {
        #[cfg(feature = "rayon")]
        let stats = blueprints.par_iter().map(|b| self.summarize(b)).collect();
        #[cfg(not(feature = "rayon"))]
        let stats = blueprints.iter().map(|b| self.summarize(b)).collect();
        stats
    }
}
