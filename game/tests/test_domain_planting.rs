use rand::rngs::StdRng;
use rand::SeedableRng;

use game::planting::{Planting, PlantingDomain, PlantingError};

mod testing;

fn planted(cell: [i32; 2]) -> PlantingDomain {
    let mut domain = PlantingDomain::default();
    domain.till_cell(cell).unwrap()();
    domain.create_crop(cell, &testing::turnip_kind(), 0).unwrap()();
    domain
}

#[test]
fn test_tilling_same_cell_twice_fails() {
    let mut domain = PlantingDomain::default();
    domain.till_cell([1, 1]).unwrap()();
    let result = domain.till_cell([1, 1]);
    assert!(matches!(
        result.err(),
        Some(PlantingError::CellAlreadyTilled { .. })
    ));
}

#[test]
fn test_planting_requires_tilled_vacant_soil() {
    let mut domain = PlantingDomain::default();
    let kind = testing::turnip_kind();

    let result = domain.create_crop([1, 1], &kind, 0);
    assert!(matches!(
        result.err(),
        Some(PlantingError::CellNotTilled { .. })
    ));

    domain.till_cell([1, 1]).unwrap()();
    domain.create_crop([1, 1], &kind, 0).unwrap()();
    let result = domain.create_crop([1, 1], &kind, 0);
    assert!(matches!(
        result.err(),
        Some(PlantingError::CellOccupied { .. })
    ));
}

#[test]
fn test_watered_crop_grows_through_stages() {
    let mut domain = planted([1, 1]);
    // sprout stage needs three watered days
    for day in 1..=3 {
        domain.water_crop([1, 1]).unwrap()();
        domain.grow_for_new_day(day);
    }
    assert_eq!(domain.get_crop([1, 1]).unwrap().stage, 1);
    // growing stage needs no water
    domain.grow_for_new_day(4);
    domain.grow_for_new_day(5);
    let crop = domain.get_crop([1, 1]).unwrap();
    assert_eq!(crop.stage, 2);
    assert!(crop.is_harvestable());
}

#[test]
fn test_dry_day_makes_no_progress_and_resets_watering() {
    let mut domain = planted([1, 1]);
    domain.grow_for_new_day(1);
    assert_eq!(domain.get_crop([1, 1]).unwrap().progress, 0.0);

    domain.water_crop([1, 1]).unwrap()();
    assert!(domain.get_crop([1, 1]).unwrap().watered);
    domain.grow_for_new_day(2);
    let crop = domain.get_crop([1, 1]).unwrap();
    assert_eq!(crop.progress, 1.0);
    assert!(!crop.watered);
}

#[test]
fn test_terminal_crop_ignores_watering() {
    let mut domain = planted([1, 1]);
    for day in 1..=3 {
        domain.water_crop([1, 1]).unwrap()();
        domain.grow_for_new_day(day);
    }
    domain.grow_for_new_day(4);
    domain.grow_for_new_day(5);
    assert!(domain.get_crop([1, 1]).unwrap().is_harvestable());

    let events = domain.water_crop([1, 1]).unwrap()();
    assert!(events.is_empty());
    assert!(!domain.get_crop([1, 1]).unwrap().watered);
}

#[test]
fn test_rain_waters_every_dry_growing_crop_once() {
    let mut domain = PlantingDomain::default();
    let kind = testing::turnip_kind();
    for cell in [[1, 1], [2, 1], [3, 1]] {
        domain.till_cell(cell).unwrap()();
        domain.create_crop(cell, &kind, 0).unwrap()();
    }
    domain.water_crop([2, 1]).unwrap()();

    let events = domain.water_all_crops();
    assert_eq!(events.len(), 2);
    // second pass within the same rain is a no-op
    assert!(domain.water_all_crops().is_empty());
}

#[test]
fn test_harvest_rolls_yield_and_keeps_soil_tilled() {
    let mut domain = planted([1, 1]);

    let result = domain.harvest_crop([1, 1], StdRng::seed_from_u64(42));
    assert!(matches!(
        result.err(),
        Some(PlantingError::NotReadyToHarvest { stage: 0, .. })
    ));

    for day in 1..=3 {
        domain.water_crop([1, 1]).unwrap()();
        domain.grow_for_new_day(day);
    }
    domain.grow_for_new_day(4);
    domain.grow_for_new_day(5);

    let events = domain.harvest_crop([1, 1], StdRng::seed_from_u64(42)).unwrap()();
    let quantity = match events[0] {
        Planting::CropHarvested { quantity, .. } => quantity,
        _ => panic!("expected harvest event"),
    };
    assert!((1..=3).contains(&quantity));
    assert!(domain.is_tilled([1, 1]));
    let result = domain.harvest_crop([1, 1], StdRng::seed_from_u64(42));
    assert!(matches!(
        result.err(),
        Some(PlantingError::CropNotFound { .. })
    ));
}
