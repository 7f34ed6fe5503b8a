use crate::api::{ActionError, Event};
use crate::cooking::{CookingError, RecipeKey, StationId};
use crate::{occur, Game};

impl Game {
    /// All ingredients must be on hand; they are consumed up front, before
    /// the station starts, and never partially.
    pub(crate) fn start_cooking(
        &mut self,
        station: StationId,
        recipe: RecipeKey,
    ) -> Result<Vec<Event>, ActionError> {
        let recipe = self.known.recipes.get(recipe)?;
        if let Some(item) = recipe.find_missing(&self.inventory, self.player)? {
            return Err(CookingError::NotEnoughIngredients {
                recipe: recipe.id,
                item,
            }
            .into());
        }
        let start = self.cooking.start_cooking(station, &recipe)?;
        let mut events: Vec<Event> = occur![start(),];
        for (item, amount) in &recipe.ingredients {
            let consume = self.inventory.consume_item(self.player, *item, *amount)?;
            events.extend(occur![consume(),]);
        }
        Ok(events)
    }
}
