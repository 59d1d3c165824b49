//! Wiring for the `cytoform` binary: loading inputs and rendering results.

pub mod report;

use anyhow::{Context, Result};
use cytoform_core::{BodyCalculator, CalcConfig};
use cytoform_data::OrganelleRegistry;
use std::fs;
use std::path::Path;

/// Loads and validates a configuration file, or the defaults without one.
pub fn load_config(path: Option<&Path>) -> Result<CalcConfig> {
    let Some(path) = path else {
        return Ok(CalcConfig::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    CalcConfig::from_toml(&content).with_context(|| format!("Invalid config {}", path.display()))
}

/// Built-in organelles, extended by the definitions in `extra` if given.
pub fn load_registry(extra: Option<&Path>) -> Result<OrganelleRegistry> {
    let mut registry = OrganelleRegistry::builtin();
    if let Some(path) = extra {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read registry {}", path.display()))?;
        registry.extend(OrganelleRegistry::from_toml(&content)?);
    }
    Ok(registry)
}

pub fn build_calculator(config: CalcConfig) -> Result<BodyCalculator> {
    let fingerprint = config.fingerprint();
    let calculator = BodyCalculator::with_default_shapes(config)?;
    tracing::info!(fingerprint = %fingerprint.get(..12).unwrap_or(&fingerprint), "Calculator ready");
    Ok(calculator)
}
