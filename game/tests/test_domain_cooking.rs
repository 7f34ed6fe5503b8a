use game::collections::Shared;
use game::cooking::{CookingDomain, CookingError, RecipeKey, RecipeKind, StationMode};
use game::inventory::{ContainerOwner, InventoryDomain, ItemKey, Slot};

mod testing;

fn soup_recipe() -> Shared<RecipeKind> {
    Shared::new(RecipeKind {
        id: RecipeKey(1),
        name: "soup".to_string(),
        ingredients: vec![(ItemKey(1), 3), (ItemKey(2), 1)],
        result: ItemKey(3),
        result_amount: 1,
        duration: 5.0,
        description: String::new(),
    })
}

#[test]
fn test_station_refuses_second_job_while_cooking() {
    let mut domain = CookingDomain::default();
    let (station, create) = domain.create_station();
    create();
    let recipe = soup_recipe();

    domain.start_cooking(station, &recipe).unwrap()();
    let result = domain.start_cooking(station, &recipe);
    assert!(matches!(
        result.err(),
        Some(CookingError::StationIsBusy { .. })
    ));
}

#[test]
fn test_cooking_finishes_after_duration() {
    let mut domain = CookingDomain::default();
    let (station, create) = domain.create_station();
    create();
    domain.start_cooking(station, &soup_recipe()).unwrap()();

    let (finished, _) = domain.update(3.0);
    assert!(finished.is_empty());
    assert!(domain.get_station(station).unwrap().progress_fraction() > 0.5);

    let (finished, _) = domain.update(2.0);
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].0, station);
    let station = domain.get_station(station).unwrap();
    assert_eq!(station.mode, StationMode::Idle);
    assert!(station.recipe.is_none());
}

#[test]
fn test_ingredient_check_counts_across_slots() {
    let mut inventory = InventoryDomain::default();
    let kind = testing::container_kind(4);
    let (container, create) = inventory.create_container(&kind, ContainerOwner::Player);
    create();
    let wheat = testing::item_kind(1, "wheat", true);
    let water = testing::item_kind(2, "water", true);
    inventory.add_item(container, &wheat, 2).unwrap()();
    inventory.add_item(container, &water, 1).unwrap()();
    // a second wheat stack in another slot
    inventory.get_mut_container(container).unwrap().slots[2] = Slot {
        item: Some(wheat.clone()),
        amount: 2,
    };

    let recipe = soup_recipe();
    assert!(recipe.can_craft(&inventory, container).unwrap());

    inventory.consume_item(container, ItemKey(2), 1).unwrap()();
    assert_eq!(
        recipe.find_missing(&inventory, container).unwrap(),
        Some(ItemKey(2))
    );
}
