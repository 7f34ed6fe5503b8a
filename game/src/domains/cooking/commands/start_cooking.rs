use crate::collections::Shared;
use crate::cooking::{Cooking, CookingDomain, CookingError, RecipeKind, StationId, StationMode};

impl CookingDomain {
    /// Ingredient checks and consumption are the caller's job; the station
    /// only guards its own occupancy.
    pub fn start_cooking<'operation>(
        &'operation mut self,
        id: StationId,
        recipe: &Shared<RecipeKind>,
    ) -> Result<impl FnOnce() -> Vec<Cooking> + 'operation, CookingError> {
        let station = self.get_station(id)?;
        if station.mode == StationMode::Cooking {
            return Err(CookingError::StationIsBusy { id });
        }
        let recipe = recipe.clone();
        let operation = move || {
            let station = self
                .stations
                .iter_mut()
                .find(|station| station.id == id)
                .unwrap();
            let key = recipe.id;
            station.mode = StationMode::Cooking;
            station.progress = 0.0;
            station.recipe = Some(recipe);
            vec![Cooking::CookingStarted {
                station: id,
                recipe: key,
            }]
        };
        Ok(operation)
    }
}
