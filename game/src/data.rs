use std::collections::HashMap;

use serde::Deserialize;

use crate::collections::{Dictionary, DictionaryError};
use crate::cooking::{RecipeKey, RecipeKind};
use crate::inventory::{ContainerKey, ContainerKind, ItemCategory, ItemKey, ItemKind};
use crate::planting::{CropKey, CropKind, GrowthStage};
use crate::timing::{CalendarKey, CalendarKind};

/// Immutable content catalogs. Kinds cross-reference each other by name in
/// the JSON and by key once loaded.
#[derive(Default)]
pub struct Knowledge {
    pub items: Dictionary<ItemKey, ItemKind>,
    pub crops: Dictionary<CropKey, CropKind>,
    pub recipes: Dictionary<RecipeKey, RecipeKind>,
    pub containers: Dictionary<ContainerKey, ContainerKind>,
    pub calendars: Dictionary<CalendarKey, CalendarKind>,
}

#[derive(Debug)]
pub enum DataError {
    Json(serde_json::Error),
    Dictionary(DictionaryError),
    UnknownItem { name: String },
    UnknownCrop { name: String },
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        DataError::Json(error)
    }
}

impl From<DictionaryError> for DataError {
    fn from(error: DictionaryError) -> Self {
        DataError::Dictionary(error)
    }
}

#[derive(Deserialize)]
struct ItemData {
    name: String,
    category: ItemCategory,
    #[serde(default = "default_stackable")]
    stackable: bool,
    #[serde(default = "default_max_stack")]
    max_stack: u32,
    #[serde(default)]
    buy_price: u32,
    #[serde(default)]
    sell_price: u32,
    #[serde(default)]
    crop: Option<String>,
}

fn default_stackable() -> bool {
    true
}

fn default_max_stack() -> u32 {
    99
}

#[derive(Deserialize)]
struct CropData {
    name: String,
    stages: Vec<GrowthStage>,
    fruit: String,
    min_harvest: u32,
    max_harvest: u32,
}

#[derive(Deserialize)]
struct IngredientData {
    item: String,
    amount: u32,
}

fn default_result_amount() -> u32 {
    1
}

#[derive(Deserialize)]
struct RecipeData {
    name: String,
    ingredients: Vec<IngredientData>,
    result: String,
    #[serde(default = "default_result_amount")]
    result_amount: u32,
    duration: f32,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
struct ContainerData {
    name: String,
    capacity: usize,
}

#[derive(Deserialize)]
struct CalendarData {
    name: String,
    day_duration: f32,
    wake_hour: f32,
    sleep_hour: f32,
    rain_chance: f32,
}

#[derive(Deserialize)]
struct KnowledgeData {
    #[serde(default)]
    items: Vec<ItemData>,
    #[serde(default)]
    crops: Vec<CropData>,
    #[serde(default)]
    recipes: Vec<RecipeData>,
    #[serde(default)]
    containers: Vec<ContainerData>,
    #[serde(default)]
    calendars: Vec<CalendarData>,
}

impl Knowledge {
    /// Keys are assigned in declaration order, then the cross-references
    /// (seed → crop, crop → fruit, recipe → items) resolve by name.
    pub fn load_from_json(text: &str) -> Result<Knowledge, DataError> {
        let data: KnowledgeData = serde_json::from_str(text)?;
        let mut knowledge = Knowledge::default();

        let item_keys: HashMap<String, ItemKey> = data
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| (item.name.clone(), ItemKey(index + 1)))
            .collect();
        let crop_keys: HashMap<String, CropKey> = data
            .crops
            .iter()
            .enumerate()
            .map(|(index, crop)| (crop.name.clone(), CropKey(index + 1)))
            .collect();

        for (index, item) in data.items.into_iter().enumerate() {
            let crop = match item.crop {
                Some(name) => Some(
                    *crop_keys
                        .get(&name)
                        .ok_or(DataError::UnknownCrop { name })?,
                ),
                None => None,
            };
            let id = ItemKey(index + 1);
            let kind = ItemKind {
                id,
                name: item.name.clone(),
                category: item.category,
                stackable: item.stackable,
                max_stack: item.max_stack,
                buy_price: item.buy_price,
                sell_price: item.sell_price,
                crop,
            };
            knowledge.items.insert(id, &item.name, kind);
        }

        for (index, crop) in data.crops.into_iter().enumerate() {
            let fruit = *item_keys
                .get(&crop.fruit)
                .ok_or(DataError::UnknownItem { name: crop.fruit })?;
            let id = CropKey(index + 1);
            let kind = CropKind {
                id,
                name: crop.name.clone(),
                stages: crop.stages,
                fruit,
                min_harvest: crop.min_harvest,
                max_harvest: crop.max_harvest,
            };
            knowledge.crops.insert(id, &crop.name, kind);
        }

        for (index, recipe) in data.recipes.into_iter().enumerate() {
            let mut ingredients = vec![];
            for ingredient in recipe.ingredients {
                let item = *item_keys
                    .get(&ingredient.item)
                    .ok_or(DataError::UnknownItem {
                        name: ingredient.item,
                    })?;
                ingredients.push((item, ingredient.amount));
            }
            let result = *item_keys
                .get(&recipe.result)
                .ok_or(DataError::UnknownItem {
                    name: recipe.result,
                })?;
            let id = RecipeKey(index + 1);
            let kind = RecipeKind {
                id,
                name: recipe.name.clone(),
                ingredients,
                result,
                result_amount: recipe.result_amount,
                duration: recipe.duration,
                description: recipe.description,
            };
            knowledge.recipes.insert(id, &recipe.name, kind);
        }

        for (index, container) in data.containers.into_iter().enumerate() {
            let id = ContainerKey(index + 1);
            let kind = ContainerKind {
                id,
                name: container.name.clone(),
                capacity: container.capacity,
            };
            knowledge.containers.insert(id, &container.name, kind);
        }

        for (index, calendar) in data.calendars.into_iter().enumerate() {
            let id = CalendarKey(index + 1);
            let kind = CalendarKind {
                id,
                name: calendar.name.clone(),
                day_duration: calendar.day_duration,
                wake_hour: calendar.wake_hour,
                sleep_hour: calendar.sleep_hour,
                rain_chance: calendar.rain_chance,
            };
            knowledge.calendars.insert(id, &calendar.name, kind);
        }

        Ok(knowledge)
    }
}
