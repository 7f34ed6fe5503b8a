use rand::thread_rng;

use crate::api::{ActionError, Event};
use crate::planting::Cell;
use crate::zoning::FarmingAction;
use crate::{occur, Game};

impl Game {
    /// Emits the harvest burst; the produced items reach the inventory only
    /// through the pickup action.
    pub(crate) fn harvest_crop(&mut self, cell: Cell) -> Result<Vec<Event>, ActionError> {
        self.zoning
            .ensure_permitted(self.player_cell, cell, FarmingAction::Harvesting)?;
        let harvest = self.planting.harvest_crop(cell, thread_rng())?;
        Ok(occur![harvest(),])
    }
}
