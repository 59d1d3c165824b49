use cytoform_core::geometry::organelle_direction;
use cytoform_core::locomotion::{
    calculate_average_density, calculate_rotation_speed, calculate_rotation_speed_for_shape,
    calculate_speed_for_shape, maximum_speed_direction,
};
use cytoform_core::shape::{FixedBody, MembraneShapeProvider};
use cytoform_core::CalcConfig;
use cytoform_data::{Hex, MembraneConfig, MembraneType, OrganelleRegistry, PlacedOrganelle};
use glam::Vec3;
use proptest::prelude::*;

const KINDS: [&str; 5] = ["cytoplasm", "flagellum", "cilia", "vacuole", "lysosome"];

prop_compose! {
    fn arb_hex()(q in -4i32..=4, r in -4i32..=4) -> Hex {
        Hex::new(q, r)
    }
}

prop_compose! {
    fn arb_layout()(
        entries in prop::collection::vec((arb_hex(), 0usize..KINDS.len()), 0..12)
    ) -> Vec<PlacedOrganelle> {
        let registry = OrganelleRegistry::builtin();
        entries
            .into_iter()
            .filter_map(|(hex, kind)| {
                registry
                    .get(KINDS[kind])
                    .map(|def| PlacedOrganelle::new(def, hex))
            })
            .collect()
    }
}

fn arb_membrane() -> impl Strategy<Value = MembraneType> {
    prop::sample::select(MembraneType::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_speed_direction_is_planar_and_bounded(organelles in arb_layout()) {
        let config = CalcConfig::default();
        let movers = organelles
            .iter()
            .filter(|o| o.definition.has_movement_component())
            .count();
        let direction = maximum_speed_direction(&organelles, &config.hex);
        prop_assert!(direction.is_finite());
        prop_assert!(direction != Vec3::ZERO);
        prop_assert_eq!(direction.y, 0.0);
        prop_assert!(
            direction.length() <= movers.max(1) as f32 + 1e-4,
            "direction {:?} longer than {} movers", direction, movers
        );
    }

    #[test]
    fn test_mirror_pair_yields_one_direction(hex in arb_hex()) {
        prop_assume!(!hex.is_origin());
        let config = CalcConfig::default();
        let registry = OrganelleRegistry::builtin();
        let flagellum = registry.get("flagellum").unwrap();
        let organelles = vec![
            PlacedOrganelle::new(flagellum.clone(), hex),
            PlacedOrganelle::new(flagellum, -hex),
        ];

        let direction = maximum_speed_direction(&organelles, &config.hex);
        let a = organelle_direction(&organelles[0], &config.hex);
        let b = organelle_direction(&organelles[1], &config.hex);
        prop_assert!(
            (direction - a).length() < 1e-5 || (direction - b).length() < 1e-5,
            "{:?} is neither {:?} nor {:?}", direction, a, b
        );
    }

    #[test]
    fn test_rotation_within_bounds(
        organelles in arb_layout(),
        inertia in 0.0f32..1e7,
        mass in 0.0f32..1e5
    ) {
        let config = CalcConfig::default();
        let body = FixedBody::new(mass, Vec3::splat(inertia));
        let rotation = calculate_rotation_speed_for_shape(&body, &organelles, &config);
        prop_assert!(rotation >= config.rotation.min_rotation);
        prop_assert!(rotation <= config.rotation.max_rotation);
    }

    #[test]
    fn test_speed_is_finite(
        organelles in arb_layout(),
        mass in 0.0f32..1e5,
        membrane in arb_membrane(),
        rigidity in -1.0f32..=1.0
    ) {
        let config = CalcConfig::default();
        let body = FixedBody::new(mass, Vec3::ONE);
        let speed = calculate_speed_for_shape(
            &organelles,
            &MembraneConfig::new(membrane, rigidity),
            &body,
            &config,
        );
        prop_assert!(speed.is_finite());
    }

    #[test]
    fn test_density_between_extremes(organelles in arb_layout()) {
        let config = CalcConfig::default();
        let density = calculate_average_density(&organelles, &config.density);
        let densities = organelles
            .iter()
            .map(|o| o.definition.density)
            .chain(std::iter::once(config.density.base_cell_density));
        let (lo, hi) = densities.fold((f32::MAX, f32::MIN), |(lo, hi), d| (lo.min(d), hi.max(d)));
        prop_assert!(density >= lo - 1e-2 && density <= hi + 1e-2, "{} not in [{}, {}]", density, lo, hi);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_membrane_rotation_within_bounds(
        organelles in arb_layout(),
        membrane in arb_membrane(),
        is_bacteria in any::<bool>()
    ) {
        let config = CalcConfig::default();
        let provider = MembraneShapeProvider::new(config.hex.clone(), config.shape.clone());
        let rotation =
            calculate_rotation_speed(&organelles, membrane, is_bacteria, &provider, &config).unwrap();
        prop_assert!(rotation >= config.rotation.min_rotation);
        prop_assert!(rotation <= config.rotation.max_rotation);
    }
}
