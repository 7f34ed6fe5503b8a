use rand::rngs::StdRng;
use rand::SeedableRng;

use game::inventory::ItemKey;
use game::serving::{
    CustomerPhase, OrderStatus, Serving, ServingDomain, ServingError, ARRIVING_TIME, EATING_TIME,
    LEAVING_TIME, MAX_PATIENCE, MENU_CAPACITY, SPAWN_INTERVAL,
};

mod testing;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn open_with_soup() -> ServingDomain {
    let mut domain = ServingDomain::default();
    let soup = testing::item_kind(1, "soup", true);
    domain.add_menu_item(&soup, 30).unwrap()();
    domain.open_restaurant().unwrap()();
    domain
}

fn seat_one(domain: &mut ServingDomain, random: &mut StdRng) {
    domain.update(SPAWN_INTERVAL, &mut *random);
    assert_eq!(domain.customers.len(), 1);
    domain.update(ARRIVING_TIME, &mut *random);
    assert_eq!(domain.customers[0].phase, CustomerPhase::Seated);
    // no more walk-ins for the rest of the test
    domain.open = false;
}

#[test]
fn test_opening_needs_menu() {
    let mut domain = ServingDomain::default();
    let result = domain.open_restaurant();
    assert!(matches!(result.err(), Some(ServingError::MenuIsEmpty)));
}

#[test]
fn test_menu_is_bounded_and_rejects_duplicates() {
    let mut domain = ServingDomain::default();
    for id in 1..=MENU_CAPACITY {
        let kind = testing::item_kind(id, &format!("dish-{}", id), true);
        domain.add_menu_item(&kind, 10).unwrap()();
    }

    let extra = testing::item_kind(99, "extra", true);
    let result = domain.add_menu_item(&extra, 10);
    assert!(matches!(result.err(), Some(ServingError::MenuIsFull)));

    domain.remove_menu_item(0).unwrap()();
    let first = testing::item_kind(2, "dish-2", true);
    let result = domain.add_menu_item(&first, 10);
    assert!(matches!(
        result.err(),
        Some(ServingError::ItemAlreadyOnMenu { .. })
    ));
}

#[test]
fn test_customer_is_seated_before_the_patience_clock_starts() {
    let mut domain = open_with_soup();
    let mut random = rng();

    let events = domain.update(SPAWN_INTERVAL, &mut random);
    assert!(events
        .iter()
        .any(|event| matches!(event, Serving::CustomerAppeared { .. })));
    assert!(matches!(
        domain.customers[0].phase,
        CustomerPhase::Arriving { .. }
    ));

    let events = domain.update(ARRIVING_TIME, &mut random);
    assert!(events
        .iter()
        .any(|event| matches!(event, Serving::CustomerSeated { .. })));
    let customer = &domain.customers[0];
    assert_eq!(customer.order.placed_at, domain.time);
    assert_eq!(customer.order.status, OrderStatus::Waiting);
}

#[test]
fn test_serving_the_ordered_dish_pays_out() {
    let mut domain = open_with_soup();
    let mut random = rng();
    seat_one(&mut domain, &mut random);

    let order = domain.customers[0].order.id;
    let wrong = domain.serve_order(order, ItemKey(55), domain.time);
    assert!(matches!(wrong.err(), Some(ServingError::WrongFood { .. })));

    let now = domain.time;
    let (payment, serve) = domain.serve_order(order, ItemKey(1), now).unwrap();
    serve();
    assert_eq!(payment, 30);
    assert_eq!(domain.customers_served, 1);
    assert_eq!(domain.total_earnings, 30);
    assert_eq!(domain.customers[0].order.status, OrderStatus::Completed);
    assert!(matches!(
        domain.customers[0].phase,
        CustomerPhase::Eating { .. }
    ));

    // eats, then leaves, then the pair vanishes together
    domain.update(EATING_TIME, &mut random);
    let events = domain.update(LEAVING_TIME, &mut random);
    assert!(events
        .iter()
        .any(|event| matches!(event, Serving::CustomerVanished { .. })));
    assert!(domain.customers.is_empty());
}

#[test]
fn test_serving_an_arriving_customer_fails() {
    let mut domain = open_with_soup();
    let mut random = rng();
    domain.update(SPAWN_INTERVAL, &mut random);

    let order = domain.customers[0].order.id;
    let result = domain.serve_order(order, ItemKey(1), domain.time);
    assert!(matches!(
        result.err(),
        Some(ServingError::CustomerNotSeated { .. })
    ));
}

#[test]
fn test_expired_order_fails_without_payment() {
    let mut domain = open_with_soup();
    let mut random = rng();
    seat_one(&mut domain, &mut random);
    let order = domain.customers[0].order.id;

    let events = domain.update(MAX_PATIENCE + 1.0, &mut random);
    assert!(events
        .iter()
        .any(|event| matches!(event, Serving::OrderFailed { .. })));
    assert_eq!(domain.total_earnings, 0);

    let result = domain.serve_order(order, ItemKey(1), domain.time);
    assert!(matches!(
        result.err(),
        Some(ServingError::CustomerNotSeated { .. })
    ));

    domain.update(LEAVING_TIME, &mut random);
    assert!(domain.customers.is_empty());
}

#[test]
fn test_forced_closure_fails_waiting_orders_once() {
    let mut domain = open_with_soup();
    let mut random = rng();
    seat_one(&mut domain, &mut random);
    domain.open = true;

    let events = domain.close_restaurant().unwrap()();
    let failed = events
        .iter()
        .filter(|event| matches!(event, Serving::OrderFailed { .. }))
        .count();
    assert_eq!(failed, 1);
    assert!(domain.menu.is_empty());
    assert!(!domain.open);

    // closing again does not re-trigger the leaving customer
    let events = domain.close_restaurant().unwrap()();
    assert_eq!(events.len(), 1);
}

#[test]
fn test_closure_spares_a_customer_already_eating() {
    let mut domain = open_with_soup();
    let mut random = rng();
    seat_one(&mut domain, &mut random);
    let order = domain.customers[0].order.id;
    let now = domain.time;
    let (_, serve) = domain.serve_order(order, ItemKey(1), now).unwrap();
    serve();

    let events = domain.close_restaurant().unwrap()();
    assert!(!events
        .iter()
        .any(|event| matches!(event, Serving::OrderFailed { .. })));
    assert_eq!(domain.customers[0].order.status, OrderStatus::Completed);
}
