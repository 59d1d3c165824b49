mod common;

use common::LayoutBuilder;
use cytoform_core::shape::{MembraneShapeProvider, PhysicsShape, ShapeCache, ShapeProvider};
use cytoform_core::CalcConfig;
use cytoform_data::MembraneType;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn provider() -> MembraneShapeProvider {
    let config = CalcConfig::default();
    MembraneShapeProvider::new(config.hex, config.shape)
}

#[test]
fn test_concurrent_requests_build_once() {
    let provider = provider();
    let organelles = LayoutBuilder::new()
        .with_organelle("nucleus", 0, 0)
        .with_organelle("flagellum", 0, 2)
        .organelles();

    let masses: Vec<f32> = (0..64)
        .into_par_iter()
        .map(|_| {
            provider
                .physics_shape(&organelles, MembraneType::Double, 1200.0, false)
                .unwrap()
                .mass()
        })
        .collect();

    assert!(masses.windows(2).all(|w| w[0] == w[1]));
    let body = provider.body_metrics();
    assert_eq!(body.builds, 1);
    assert_eq!(body.hits + body.misses, 64);
    assert_eq!(provider.membrane_metrics().builds, 1);
}

#[test]
fn test_distinct_keys_build_independently() {
    let provider = provider();
    let layouts: Vec<_> = (1..=8)
        .map(|n| {
            let mut builder = LayoutBuilder::new();
            for q in 0..n {
                builder = builder.with_organelle("cytoplasm", q, 0);
            }
            builder.organelles()
        })
        .collect();

    layouts.par_iter().for_each(|organelles| {
        for membrane in [MembraneType::Single, MembraneType::Cellulose] {
            provider
                .physics_shape(organelles, membrane, 1000.0, false)
                .unwrap();
        }
    });

    assert_eq!(provider.cached(), (16, 16));
    assert_eq!(provider.body_metrics().builds, 16);
}

#[test]
fn test_layout_change_needs_invalidation_only_for_same_footprint() {
    let provider = provider();
    let before = LayoutBuilder::new()
        .with_organelle("cytoplasm", 0, 0)
        .with_organelle("cytoplasm", 1, 0)
        .organelles();
    // Same hexes, different organelle: same footprint, same membrane
    let swapped = LayoutBuilder::new()
        .with_organelle("vacuole", 0, 0)
        .with_organelle("cytoplasm", 1, 0)
        .organelles();

    let a = provider.membrane(&before, MembraneType::Single);
    let b = provider.membrane(&swapped, MembraneType::Single);
    assert!(Arc::ptr_eq(&a, &b));

    assert_eq!(provider.invalidate_layout(&before), 1);
    let c = provider.membrane(&swapped, MembraneType::Single);
    assert!(!Arc::ptr_eq(&a, &c));
    assert_eq!(*a, *c);
}

#[test]
fn test_cache_retries_after_failure() {
    let cache: ShapeCache<u8, u8> = ShapeCache::new();
    let attempts = AtomicUsize::new(0);
    let build = || {
        if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
            Err("first build fails")
        } else {
            Ok(9)
        }
    };
    assert!(cache.get_or_try_compute(&1, build).is_err());
    assert_eq!(*cache.get_or_try_compute(&1, build).unwrap(), 9);
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[test]
fn test_clear_drops_everything() {
    let provider = provider();
    let organelles = LayoutBuilder::new()
        .with_organelle("cytoplasm", 0, 0)
        .organelles();
    provider
        .physics_shape(&organelles, MembraneType::Single, 1000.0, true)
        .unwrap();
    provider.clear();
    assert_eq!(provider.cached(), (0, 0));
    assert_eq!(provider.body_metrics().invalidations, 1);
}
