use crate::api::{ActionError, Event};
use crate::inventory::{InventoryError, ItemKey};
use crate::planting::Cell;
use crate::zoning::FarmingAction;
use crate::{occur, Game};

impl Game {
    /// Validates the seed and the soil before anything mutates, then plants
    /// and consumes one seed in a single event stream.
    pub(crate) fn plant_crop(&mut self, cell: Cell, seed: ItemKey) -> Result<Vec<Event>, ActionError> {
        self.zoning
            .ensure_permitted(self.player_cell, cell, FarmingAction::Planting)?;
        let kind = self.known.items.get(seed)?;
        let crop = kind
            .crop
            .ok_or(ActionError::ItemCannotBePlanted { item: seed })?;
        let crop_kind = self.known.crops.get(crop)?;
        if !self.inventory.has_item(self.player, seed)? {
            return Err(InventoryError::ItemNotFound {
                container: self.player,
                item: seed,
            }
            .into());
        }
        let day = self.timing.get_calendar(self.calendar)?.day;
        let plant = self.planting.create_crop(cell, &crop_kind, day)?;
        let consume = self.inventory.consume_item(self.player, seed, 1)?;
        Ok(occur![plant(), consume(),])
    }
}
