mod common;

use common::{fixed_calculator, membrane_calculator, LayoutBuilder};
use cytoform_core::geometry::{organelle_direction, FORWARD};
use cytoform_core::locomotion::{calculate_rotation_speed_for_shape, maximum_speed_direction};
use cytoform_core::shape::FixedBody;
use cytoform_core::CalcConfig;
use cytoform_data::{MembraneType, OrganelleDefinition, PlacedOrganelle};
use glam::Vec3;

fn strong_flagellum() -> OrganelleDefinition {
    OrganelleDefinition::new("flagellum", "Flagellum")
        .with_density(1500.0, 0.5)
        .with_movement(100.0, 0.0)
}

/// A filled hexagon of cytoplasm with the given radius.
fn blob(builder: LayoutBuilder, radius: i32, id: &str) -> LayoutBuilder {
    let mut builder = builder;
    for q in -radius..=radius {
        for r in (-radius).max(-q - radius)..=radius.min(-q + radius) {
            builder = builder.with_organelle(id, q, r);
        }
    }
    builder
}

#[test]
fn test_reference_fixture() {
    let (calculator, provider) = fixed_calculator(4.0, Vec3::splat(4000.0));
    let organelles = LayoutBuilder::new()
        .with_definition(strong_flagellum())
        .with_organelle("flagellum", 1, 0)
        .organelles();

    let speed = calculator
        .speed(&organelles, MembraneType::Single, 0.0, false)
        .unwrap();

    // One flagellum at momentum 100 adds exactly its base force along the
    // best direction.
    let config = CalcConfig::default();
    let expected =
        (config.movement.base_movement_force + config.movement.flagella_base_force) / 4.0;
    assert_close!(speed, expected, 1e-3);
    assert_eq!(provider.requests(), 1);
}

#[test]
fn test_flagellum_behind_pushes_forward() {
    let (calculator, _) = fixed_calculator(1.0, Vec3::ONE);
    let organelles = LayoutBuilder::new()
        .with_organelle("cytoplasm", 0, 0)
        .with_organelle("flagellum", 0, 1)
        .organelles();
    let direction = calculator.maximum_speed_direction(&organelles);
    assert_unit!(direction);
    assert!((direction - FORWARD).length() < 1e-5);
}

#[test]
fn test_mirrored_flagella_pick_one_side() {
    let config = CalcConfig::default();
    let organelles = LayoutBuilder::new()
        .with_organelle("cytoplasm", 0, 0)
        .with_organelle("flagellum", 2, -1)
        .with_organelle("flagellum", -2, 1)
        .organelles();

    let direction = maximum_speed_direction(&organelles, &config.hex);
    let a = organelle_direction(&organelles[1], &config.hex);
    let b = organelle_direction(&organelles[2], &config.hex);
    assert!(direction != Vec3::ZERO);
    assert!((direction - a).length() < 1e-5 || (direction - b).length() < 1e-5);
}

fn flagella_at(positions: &[(i32, i32)]) -> Vec<PlacedOrganelle> {
    positions
        .iter()
        .fold(LayoutBuilder::new(), |b, &(q, r)| b.with_organelle("flagellum", q, r))
        .organelles()
}

#[test]
fn test_two_mirrored_pairs_resolve_in_order() {
    let config = CalcConfig::default();
    let organelles = flagella_at(&[(1, 0), (-1, 0), (0, 1), (0, -1)]);
    let dir = |i: usize| organelle_direction(&organelles[i], &config.hex);

    // The first of each pair is subtracted, leaving the second ones' sum
    let direction = maximum_speed_direction(&organelles, &config.hex);
    assert!((direction - (dir(1) - dir(2))).length() < 1e-5, "{direction:?}");
    assert!((direction - Vec3::new(0.866_025, 0.0, 1.5)).length() < 1e-4);
}

#[test]
fn test_mirrored_pair_order_changes_result() {
    let config = CalcConfig::default();
    let forward_first = flagella_at(&[(1, 0), (-1, 0), (0, 1), (0, -1)]);
    let backward_first = flagella_at(&[(-1, 0), (1, 0), (0, 1), (0, -1)]);

    let a = maximum_speed_direction(&forward_first, &config.hex);
    let b = maximum_speed_direction(&backward_first, &config.hex);
    assert!((b - Vec3::new(-0.866_025, 0.0, -1.5)).length() < 1e-4, "{b:?}");
    assert!((a + b).length() < 1e-4);
}

#[test]
fn test_aligned_flagella_lengthen_direction() {
    let config = CalcConfig::default();
    let organelles = flagella_at(&[(0, 1), (0, 2)]);
    let direction = maximum_speed_direction(&organelles, &config.hex);
    assert_close!(direction.length(), 2.0, 1e-5);
    assert!((direction.normalize() - FORWARD).length() < 1e-5);
}

#[test]
fn test_walled_membrane_is_slower() {
    let (calculator, _) = membrane_calculator();
    let organelles = blob(LayoutBuilder::new(), 1, "cytoplasm")
        .with_organelle("flagellum", 0, 2)
        .organelles();

    let single = calculator
        .speed(&organelles, MembraneType::Single, 0.0, false)
        .unwrap();
    let silica = calculator
        .speed(&organelles, MembraneType::Silica, 0.0, false)
        .unwrap();
    assert!(single > silica, "{single} <= {silica}");
    assert!(silica > 0.0);
}

#[test]
fn test_bacteria_are_faster() {
    let (calculator, _) = membrane_calculator();
    let organelles = blob(LayoutBuilder::new(), 1, "cytoplasm").organelles();

    let cell = calculator
        .speed(&organelles, MembraneType::Single, 0.0, false)
        .unwrap();
    let bacterium = calculator
        .speed(&organelles, MembraneType::Single, 0.0, true)
        .unwrap();
    assert_close!(bacterium / cell, 4.0, 1e-2);
}

#[test]
fn test_larger_cells_turn_slower() {
    let (calculator, _) = membrane_calculator();
    let small = LayoutBuilder::new()
        .with_organelle("cytoplasm", 0, 0)
        .organelles();
    let large = blob(LayoutBuilder::new(), 2, "cytoplasm").organelles();

    let small_rotation = calculator
        .rotation_speed(&small, MembraneType::Single, false)
        .unwrap();
    let large_rotation = calculator
        .rotation_speed(&large, MembraneType::Single, false)
        .unwrap();

    // Higher values mean slower turning
    assert!(large_rotation > small_rotation);
}

#[test]
fn test_cilia_speed_up_turning() {
    let (calculator, _) = membrane_calculator();
    let plain = blob(LayoutBuilder::new(), 2, "cytoplasm").organelles();

    // Same footprint and density, the outer corners swapped for cilia
    let mut ciliated = LayoutBuilder::new();
    for q in -2i32..=2 {
        for r in (-2i32).max(-q - 2)..=2i32.min(-q + 2) {
            let id = if q.abs().max(r.abs()).max((q + r).abs()) == 2 {
                "cilia"
            } else {
                "cytoplasm"
            };
            ciliated = ciliated.with_organelle(id, q, r);
        }
    }
    let ciliated = ciliated.organelles();

    let without = calculator
        .rotation_speed(&plain, MembraneType::Single, false)
        .unwrap();
    let with = calculator
        .rotation_speed(&ciliated, MembraneType::Single, false)
        .unwrap();
    assert!(with < without, "{with} >= {without}");
}

#[test]
fn test_cilia_count_times_largest_radius() {
    let config = CalcConfig::default();
    let body = FixedBody::new(1.0, Vec3::splat(16_000.0));
    let near = LayoutBuilder::new()
        .with_organelle("cilia", 3, 0)
        .with_organelle("cilia", 1, 0)
        .organelles();
    let far = LayoutBuilder::new()
        .with_organelle("cilia", 3, 0)
        .with_organelle("cilia", 3, -1)
        .organelles();

    // Only the largest radius matters, so (3, 0) dominates both layouts
    let a = calculate_rotation_speed_for_shape(&body, &near, &config);
    let b = calculate_rotation_speed_for_shape(&body, &far, &config);
    assert_close!(a, b, 1e-6);
}

#[test]
fn test_readable_rotation_is_inverse() {
    let (calculator, _) = fixed_calculator(1.0, Vec3::splat(16_000.0));
    let stats = calculator
        .summarize(&LayoutBuilder::new().with_organelle("cytoplasm", 0, 0).build())
        .unwrap();
    let readable = stats.readable_rotation_speed.unwrap();
    assert_close!(readable, 100.0 / stats.rotation_speed, 1e-4);
}
