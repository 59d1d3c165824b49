pub mod macros;

use cytoform_core::shape::{FixedBody, FixedShapeProvider, MembraneShapeProvider, ShapeProvider};
use cytoform_core::{BodyCalculator, CalcConfig};
use cytoform_data::{
    CellBlueprint, Compound, Enzyme, Hex, MembraneConfig, MembraneType, OrganelleDefinition,
    OrganelleRegistry, OrganelleUpgrades, PlacedOrganelle,
};
use glam::Vec3;
use std::sync::Arc;

#[allow(dead_code)]
pub struct LayoutBuilder {
    registry: OrganelleRegistry,
    organelles: Vec<PlacedOrganelle>,
    membrane: MembraneType,
    rigidity: f32,
    is_bacteria: bool,
}

#[allow(dead_code)]
impl LayoutBuilder {
    pub fn new() -> Self {
        Self {
            registry: OrganelleRegistry::builtin(),
            organelles: Vec::new(),
            membrane: MembraneType::Single,
            rigidity: 0.0,
            is_bacteria: false,
        }
    }

    /// Registers a custom definition, replacing a built-in with the same id.
    pub fn with_definition(mut self, definition: OrganelleDefinition) -> Self {
        self.registry.insert(definition);
        self
    }

    pub fn with_organelle(mut self, id: &str, q: i32, r: i32) -> Self {
        let definition = self.definition(id);
        self.organelles
            .push(PlacedOrganelle::new(definition, Hex::new(q, r)));
        self
    }

    pub fn with_specialized_storage(mut self, id: &str, q: i32, r: i32, compound: Compound) -> Self {
        let definition = self.definition(id);
        self.organelles.push(
            PlacedOrganelle::new(definition, Hex::new(q, r))
                .with_upgrades(OrganelleUpgrades::specialized_storage(compound)),
        );
        self
    }

    pub fn with_enzyme(mut self, id: &str, q: i32, r: i32, enzyme: Enzyme) -> Self {
        let definition = self.definition(id);
        self.organelles.push(
            PlacedOrganelle::new(definition, Hex::new(q, r))
                .with_upgrades(OrganelleUpgrades::enzyme(enzyme)),
        );
        self
    }

    pub fn with_membrane(mut self, membrane: MembraneType, rigidity: f32) -> Self {
        self.membrane = membrane;
        self.rigidity = rigidity;
        self
    }

    pub fn bacteria(mut self) -> Self {
        self.is_bacteria = true;
        self
    }

    pub fn organelles(&self) -> Vec<PlacedOrganelle> {
        self.organelles.clone()
    }

    pub fn build(self) -> CellBlueprint {
        CellBlueprint::new(
            self.organelles,
            MembraneConfig::new(self.membrane, self.rigidity),
        )
        .bacteria(self.is_bacteria)
    }

    fn definition(&self, id: &str) -> Arc<OrganelleDefinition> {
        self.registry
            .get(id)
            .unwrap_or_else(|| panic!("organelle '{id}' not registered"))
    }
}

#[allow(dead_code)]
pub fn fixed_calculator(mass: f32, inertia: Vec3) -> (BodyCalculator, Arc<FixedShapeProvider>) {
    let provider = Arc::new(FixedShapeProvider::new(FixedBody::new(mass, inertia)));
    let shapes: Arc<dyn ShapeProvider> = provider.clone();
    let calculator = BodyCalculator::builder()
        .config(CalcConfig::default())
        .shape_provider(shapes)
        .build()
        .expect("default config is valid");
    (calculator, provider)
}

#[allow(dead_code)]
pub fn membrane_calculator() -> (BodyCalculator, Arc<MembraneShapeProvider>) {
    let config = CalcConfig::default();
    let provider = Arc::new(MembraneShapeProvider::new(
        config.hex.clone(),
        config.shape.clone(),
    ));
    let shapes: Arc<dyn ShapeProvider> = provider.clone();
    let calculator = BodyCalculator::builder()
        .config(config)
        .shape_provider(shapes)
        .build()
        .expect("default config is valid");
    (calculator, provider)
}
