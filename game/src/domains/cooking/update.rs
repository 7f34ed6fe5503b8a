use crate::collections::Shared;
use crate::cooking::{Cooking, CookingDomain, RecipeKind, StationId, StationMode};

impl CookingDomain {
    /// Returns the recipes that finished this tick; the caller deposits the
    /// results.
    pub fn update(&mut self, time: f32) -> (Vec<(StationId, Shared<RecipeKind>)>, Vec<Cooking>) {
        let mut finished = vec![];
        let mut events = vec![];
        for station in self.stations.iter_mut() {
            if station.mode != StationMode::Cooking {
                continue;
            }
            let Some(recipe) = station.recipe.clone() else {
                continue;
            };
            station.progress += time;
            if station.progress >= recipe.duration {
                station.mode = StationMode::Idle;
                station.progress = 0.0;
                station.recipe = None;
                events.push(Cooking::CookingFinished {
                    station: station.id,
                    recipe: recipe.id,
                });
                finished.push((station.id, recipe));
            }
        }
        (finished, events)
    }
}
