//! Linear and rotational movement of a cell.
//!
//! Everything here is derived from the organelle layout alone: which
//! organelles push, where they sit relative to the center, and how heavy the
//! resulting body is.

use crate::config::{CalcConfig, DensityConfig, HexConfig, MovementConfig, RotationConfig, ShapeConfig};
use crate::error::{CalcError, Result};
use crate::geometry::{axial_to_cartesian, organelle_direction, FORWARD, RIGHT, UP};
use crate::shape::{PhysicsShape, ShapeProvider};
use cytoform_data::{Hex, MembraneConfig, MembraneType, PlacedOrganelle};
use glam::Vec3;

/// Thrust per axis, split into the four one-directional components.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct AxisThrust {
    forward: f32,
    backward: f32,
    right: f32,
    left: f32,
}

impl AxisThrust {
    /// Positive parts of `direction` along each axis, each scaled by `scale`.
    fn from_direction(direction: Vec3, scale: f32) -> Self {
        let forward = direction.dot(FORWARD);
        let right = direction.dot(RIGHT);
        Self {
            forward: forward.max(0.0) * scale,
            backward: (-forward).max(0.0) * scale,
            right: right.max(0.0) * scale,
            left: (-right).max(0.0) * scale,
        }
    }

    fn add(&mut self, other: Self) {
        self.forward += other.forward;
        self.backward += other.backward;
        self.right += other.right;
        self.left += other.left;
    }

    fn weighted_by(&self, factors: &Self) -> f32 {
        self.forward * factors.forward
            + self.backward * factors.backward
            + self.right * factors.right
            + self.left * factors.left
    }
}

fn movement_organelles(organelles: &[PlacedOrganelle]) -> impl Iterator<Item = &PlacedOrganelle> {
    organelles
        .iter()
        .filter(|o| o.definition.has_movement_component())
}

/// Direction the cell moves fastest in.
///
/// Directions of all movement organelles are summed. Mirrored pairs (hex
/// positions summing to the origin) are then resolved in slice order: each
/// organelle is compared against its first mirror partner, and unless the
/// running sum is already closer to the organelle's own direction, that
/// direction is subtracted. The result therefore depends on organelle order
/// once more than one mirrored pair is present.
///
/// The resolved sum is returned as is, not normalized; its length grows with
/// the number of aligned movers. A sum of exactly zero gives [`FORWARD`].
#[must_use]
pub fn maximum_speed_direction(organelles: &[PlacedOrganelle], hex: &HexConfig) -> Vec3 {
    let movers: Vec<(&PlacedOrganelle, Vec3)> = movement_organelles(organelles)
        .map(|o| (o, organelle_direction(o, hex)))
        .collect();

    let mut direction: Vec3 = movers.iter().map(|(_, d)| *d).sum();

    for (i, (tested, tested_direction)) in movers.iter().enumerate() {
        let partner = movers
            .iter()
            .enumerate()
            .find(|(j, (check, _))| *j != i && tested.position + check.position == Hex::ORIGIN);

        if let Some((_, (_, partner_direction))) = partner {
            if (direction - *partner_direction).length() > (direction - *tested_direction).length()
            {
                continue;
            }
            direction -= *tested_direction;
        }
    }

    if direction == Vec3::ZERO {
        return FORWARD;
    }
    direction
}

/// Membrane contribution to the movement force.
#[must_use]
pub fn base_movement_force(membrane: &MembraneConfig, config: &MovementConfig) -> f32 {
    config.base_movement_force
        * (membrane.membrane_type.movement_factor()
            - membrane.rigidity * config.membrane_rigidity_mobility_modifier)
}

/// Force movement organelles add along `direction`.
#[must_use]
pub fn organelle_movement_force(
    organelles: &[PlacedOrganelle],
    direction: Vec3,
    hex: &HexConfig,
    config: &MovementConfig,
) -> f32 {
    let mut thrust = AxisThrust::default();
    for organelle in movement_organelles(organelles) {
        let constant = config.flagella_base_force * organelle.definition.momentum() / 100.0;
        thrust.add(AxisThrust::from_direction(
            organelle_direction(organelle, hex),
            constant,
        ));
    }

    let factors = AxisThrust::from_direction(direction.normalize_or_zero(), 1.0);
    thrust.weighted_by(&factors)
}

/// Body mass bounded below, so it can always be divided by.
#[must_use]
pub fn effective_mass(shape: &dyn PhysicsShape, config: &ShapeConfig) -> f32 {
    let mass = shape.mass();
    if mass >= config.min_body_mass {
        return mass;
    }
    tracing::warn!(
        mass,
        min = config.min_body_mass,
        "Body mass below minimum, clamping"
    );
    config.min_body_mass
}

/// Weighted mean density of the cytoplasm baseline and all organelles.
#[must_use]
pub fn calculate_average_density(organelles: &[PlacedOrganelle], config: &DensityConfig) -> f32 {
    if organelles.is_empty() {
        return config.base_cell_density;
    }

    let mut total_density = config.base_cell_density * config.base_cell_density_volume;
    let mut total_volume = config.base_cell_density_volume;
    for organelle in organelles {
        let volume = organelle.definition.relative_density_volume;
        total_density += organelle.definition.density * volume;
        total_volume += volume;
    }

    total_density / total_volume
}

/// Top linear speed of a cell. Zero and negative results are valid.
///
/// `membrane_rigidity` is used as given; [`MembraneConfig::new`] is where
/// callers get it clamped into `[-1, 1]`.
pub fn calculate_speed(
    organelles: &[PlacedOrganelle],
    membrane_type: MembraneType,
    membrane_rigidity: f32,
    is_bacteria: bool,
    provider: &dyn ShapeProvider,
    config: &CalcConfig,
) -> Result<f32> {
    let density = calculate_average_density(organelles, &config.density);
    let shape = provider.physics_shape(organelles, membrane_type, density, is_bacteria)?;
    let membrane = MembraneConfig {
        membrane_type,
        rigidity: membrane_rigidity,
    };
    Ok(calculate_speed_for_shape(
        organelles,
        &membrane,
        shape.as_ref(),
        config,
    ))
}

#[must_use]
pub fn calculate_speed_for_shape(
    organelles: &[PlacedOrganelle],
    membrane: &MembraneConfig,
    shape: &dyn PhysicsShape,
    config: &CalcConfig,
) -> f32 {
    let direction = maximum_speed_direction(organelles, &config.hex);
    let organelle_force =
        organelle_movement_force(organelles, direction, &config.hex, &config.movement);
    let base_force = base_movement_force(membrane, &config.movement);

    (base_force + organelle_force) / effective_mass(shape, &config.shape)
}

/// Rotation speed on the inverted scale: lower values turn faster.
pub fn calculate_rotation_speed(
    organelles: &[PlacedOrganelle],
    membrane_type: MembraneType,
    is_bacteria: bool,
    provider: &dyn ShapeProvider,
    config: &CalcConfig,
) -> Result<f32> {
    let density = calculate_average_density(organelles, &config.density);
    let shape = provider.physics_shape(organelles, membrane_type, density, is_bacteria)?;
    Ok(calculate_rotation_speed_for_shape(
        shape.as_ref(),
        organelles,
        config,
    ))
}

/// Rotation speed from an already built body.
///
/// A fixed torque about the vertical axis is applied and the resulting
/// angular velocity mapped onto `[min_rotation, max_rotation]` through a
/// fourth root. Cilia then lower the value by their count times the largest
/// cilia radius.
#[must_use]
pub fn calculate_rotation_speed_for_shape(
    shape: &dyn PhysicsShape,
    organelles: &[PlacedOrganelle],
    config: &CalcConfig,
) -> f32 {
    let rotation = &config.rotation;
    let torque = UP * rotation.test_torque;
    let angular = shape.torque_response(torque);

    let mut fraction = (angular.y / torque.y * rotation.fraction_scale).powf(0.25);
    if !fraction.is_finite() {
        fraction = 0.0;
    }
    let fraction = fraction.clamp(0.0, 1.0);

    let mut speed = rotation.max_rotation - (rotation.max_rotation - rotation.min_rotation) * fraction;

    let (cilia_count, max_radius_squared) = cilia_reach(organelles, &config.hex);
    if cilia_count > 0 {
        speed -= cilia_count as f32
            * max_radius_squared.sqrt()
            * rotation.cilia_radius_factor_multiplier
            * rotation.cilia_rotation_factor;
    }

    clamp_rotation(speed, rotation)
}

/// Number of cilia and the largest squared cilia distance from the center.
///
/// The distance starts at one so cilia near the center still count fully.
fn cilia_reach(organelles: &[PlacedOrganelle], hex: &HexConfig) -> (usize, f32) {
    organelles
        .iter()
        .filter(|o| o.definition.has_cilia_component())
        .fold((0, 1.0f32), |(count, max), o| {
            let distance = axial_to_cartesian(o.position, hex).length_squared();
            (count + 1, max.max(distance))
        })
}

fn clamp_rotation(speed: f32, config: &RotationConfig) -> f32 {
    if speed.is_nan() {
        return config.max_rotation;
    }
    speed.max(config.min_rotation).min(config.max_rotation)
}

/// Converts a raw rotation speed into the number shown to players.
///
/// The raw scale is inverted, so the display value is `100 / raw`. A raw
/// value of zero has no display value.
pub fn rotation_speed_to_user_readable_number(raw: f32) -> Result<f32> {
    if raw == 0.0 || !raw.is_finite() {
        return Err(CalcError::UndefinedRotationSpeed(raw));
    }
    Ok(1.0 / raw * 100.0)
}
