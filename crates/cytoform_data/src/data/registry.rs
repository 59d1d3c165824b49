use super::hex::Hex;
use super::organelle::OrganelleDefinition;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Serialize, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    organelles: Vec<OrganelleDefinition>,
}

/// Read-only lookup of organelle definitions by id.
#[derive(Debug, Clone, Default)]
pub struct OrganelleRegistry {
    definitions: HashMap<String, Arc<OrganelleDefinition>>,
}

impl OrganelleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock organelle set.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        let ring = vec![
            Hex::ORIGIN,
            Hex::new(1, 0),
            Hex::new(0, 1),
            Hex::new(-1, 1),
            Hex::new(-1, 0),
            Hex::new(0, -1),
            Hex::new(1, -1),
        ];

        for def in [
            OrganelleDefinition::new("cytoplasm", "Cytoplasm")
                .with_density(1100.0, 1.0)
                .with_storage(4.0),
            OrganelleDefinition::new("flagellum", "Flagellum")
                .with_density(1500.0, 0.5)
                .with_movement(20.0, 0.0),
            OrganelleDefinition::new("cilia", "Cilia")
                .with_density(1100.0, 1.0)
                .with_cilia(),
            OrganelleDefinition::new("vacuole", "Vacuole")
                .with_density(1050.0, 1.0)
                .with_storage(8.0),
            OrganelleDefinition::new("lysosome", "Lysosome")
                .with_density(1100.0, 1.0)
                .with_lysosome(),
            OrganelleDefinition::new("mitochondrion", "Mitochondrion")
                .with_density(1400.0, 1.0)
                .with_storage(2.0),
            OrganelleDefinition::new("chemoplast", "Chemoplast")
                .with_density(1300.0, 2.0)
                .with_hexes(vec![Hex::ORIGIN, Hex::new(1, 0)])
                .with_storage(2.0),
            OrganelleDefinition::new("nucleus", "Nucleus")
                .with_density(1600.0, 3.0)
                .with_hexes(ring)
                .with_storage(10.0),
        ] {
            registry.insert(def);
        }

        registry
    }

    /// Parses `[[organelles]]` tables from TOML.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let file: RegistryFile = toml::from_str(content)?;
        let mut registry = Self::new();
        for def in file.organelles {
            anyhow::ensure!(!def.id.is_empty(), "Organelle id must not be empty");
            anyhow::ensure!(
                def.relative_density_volume >= 0.0,
                "Organelle '{}' has negative density volume",
                def.id
            );
            anyhow::ensure!(
                !def.hexes.is_empty(),
                "Organelle '{}' must occupy at least one hex",
                def.id
            );
            anyhow::ensure!(
                !registry.definitions.contains_key(&def.id),
                "Duplicate organelle id '{}'",
                def.id
            );
            registry.insert(def);
        }
        Ok(registry)
    }

    /// Adds or replaces a definition, returning the shared handle.
    pub fn insert(&mut self, definition: OrganelleDefinition) -> Arc<OrganelleDefinition> {
        let def = Arc::new(definition);
        self.definitions.insert(def.id.clone(), Arc::clone(&def));
        def
    }

    /// Layers `other` over `self`; definitions in `other` win.
    pub fn extend(&mut self, other: OrganelleRegistry) {
        self.definitions.extend(other.definitions);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<OrganelleDefinition>> {
        self.definitions.get(id).cloned()
    }

    pub fn require(&self, id: &str) -> anyhow::Result<Arc<OrganelleDefinition>> {
        self.get(id)
            .ok_or_else(|| anyhow::anyhow!("Unknown organelle: {id}"))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Sorted definition ids.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
