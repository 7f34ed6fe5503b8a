use serde::{Deserialize, Serialize};

pub use crate::collections::{Sequence, Shared};
use crate::inventory::ItemKey;

#[derive(Default)]
pub struct CookingDomain {
    pub stations: Vec<Station>,
    pub stations_id: Sequence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeKey(pub usize);

pub struct RecipeKind {
    pub id: RecipeKey,
    pub name: String,
    pub ingredients: Vec<(ItemKey, u32)>,
    pub result: ItemKey,
    pub result_amount: u32,
    pub duration: f32,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StationId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StationMode {
    Idle,
    Cooking,
}

pub struct Station {
    pub id: StationId,
    pub mode: StationMode,
    pub recipe: Option<Shared<RecipeKind>>,
    pub progress: f32,
}

impl Station {
    /// In `[0.0, 1.0]` for the progress bar.
    pub fn progress_fraction(&self) -> f32 {
        match &self.recipe {
            Some(recipe) if recipe.duration > 0.0 => (self.progress / recipe.duration).min(1.0),
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Cooking {
    StationCreated {
        station: StationId,
    },
    CookingStarted {
        station: StationId,
        recipe: RecipeKey,
    },
    CookingFinished {
        station: StationId,
        recipe: RecipeKey,
    },
    ResultLost {
        station: StationId,
        item: ItemKey,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub enum CookingError {
    StationNotFound { id: StationId },
    StationIsBusy { id: StationId },
    NotEnoughIngredients { recipe: RecipeKey, item: ItemKey },
}

impl CookingDomain {
    pub fn get_station(&self, id: StationId) -> Result<&Station, CookingError> {
        self.stations
            .iter()
            .find(|station| station.id == id)
            .ok_or(CookingError::StationNotFound { id })
    }

    pub fn get_station_mut(&mut self, id: StationId) -> Result<&mut Station, CookingError> {
        self.stations
            .iter_mut()
            .find(|station| station.id == id)
            .ok_or(CookingError::StationNotFound { id })
    }
}
