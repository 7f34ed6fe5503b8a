#![allow(dead_code)]

use game::collections::Shared;
use game::data::Knowledge;
use game::inventory::{ContainerKey, ContainerKind, ItemCategory, ItemKey, ItemKind};
use game::planting::{CropKey, CropKind, GrowthStage};
use game::zoning::Zone;
use game::Game;

pub const CONTENT: &str = r#"{
    "calendars": [
        {
            "name": "standard",
            "day_duration": 120.0,
            "wake_hour": 6.0,
            "sleep_hour": 20.0,
            "rain_chance": 0.3
        }
    ],
    "containers": [
        { "name": "player", "capacity": 6 },
        { "name": "chest", "capacity": 4 }
    ],
    "items": [
        { "name": "turnip-seed", "category": "Seed", "crop": "turnip" },
        { "name": "turnip", "category": "Crop", "sell_price": 12 },
        { "name": "water", "category": "Ingredient" },
        { "name": "soup", "category": "CookedFood", "sell_price": 30 },
        { "name": "hoe", "category": "Tool", "stackable": false }
    ],
    "crops": [
        {
            "name": "turnip",
            "stages": [
                { "name": "sprout", "days_to_next": 3.0, "requires_water": true },
                { "name": "growing", "days_to_next": 2.0, "requires_water": false },
                { "name": "ripe", "days_to_next": 0.0, "requires_water": false }
            ],
            "fruit": "turnip",
            "min_harvest": 1,
            "max_harvest": 3
        }
    ],
    "recipes": [
        {
            "name": "soup",
            "ingredients": [
                { "item": "turnip", "amount": 2 },
                { "item": "water", "amount": 1 }
            ],
            "result": "soup",
            "duration": 5.0,
            "description": "Plain turnip soup."
        }
    ]
}"#;

pub fn knowledge() -> Knowledge {
    Knowledge::load_from_json(CONTENT).unwrap()
}

pub fn farm_zone() -> Zone {
    Zone {
        name: "farm".to_string(),
        min: [0, 0],
        max: [9, 9],
        tilling: true,
        planting: true,
        watering: true,
        harvesting: true,
    }
}

pub fn game() -> Game {
    let mut game = Game::new(knowledge()).unwrap();
    game.zoning.zones.push(farm_zone());
    game.set_player_position([1, 1]);
    game
}

pub fn item_key(game: &Game, name: &str) -> ItemKey {
    game.known.items.find(name).unwrap().id
}

pub fn give_item(game: &mut Game, name: &str, amount: u32) {
    let kind = game.known.items.find(name).unwrap();
    let add = game.inventory.add_item(game.player, &kind, amount).unwrap();
    add();
}

pub fn player_amount(game: &Game, name: &str) -> u32 {
    let item = item_key(game, name);
    game.inventory.get_amount(game.player, item).unwrap()
}

pub fn container_kind(capacity: usize) -> Shared<ContainerKind> {
    Shared::new(ContainerKind {
        id: ContainerKey(1),
        name: "chest".to_string(),
        capacity,
    })
}

pub fn item_kind(id: usize, name: &str, stackable: bool) -> Shared<ItemKind> {
    Shared::new(ItemKind {
        id: ItemKey(id),
        name: name.to_string(),
        category: ItemCategory::Other,
        stackable,
        max_stack: 99,
        buy_price: 0,
        sell_price: 0,
        crop: None,
    })
}

pub fn turnip_kind() -> Shared<CropKind> {
    Shared::new(CropKind {
        id: CropKey(1),
        name: "turnip".to_string(),
        stages: vec![
            GrowthStage {
                name: "sprout".to_string(),
                days_to_next: 3.0,
                requires_water: true,
            },
            GrowthStage {
                name: "growing".to_string(),
                days_to_next: 2.0,
                requires_water: false,
            },
            GrowthStage {
                name: "ripe".to_string(),
                days_to_next: 0.0,
                requires_water: false,
            },
        ],
        fruit: ItemKey(2),
        min_harvest: 1,
        max_harvest: 3,
    })
}
