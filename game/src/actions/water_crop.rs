use crate::api::{ActionError, Event};
use crate::planting::Cell;
use crate::zoning::FarmingAction;
use crate::{occur, Game};

impl Game {
    pub(crate) fn water_crop(&mut self, cell: Cell) -> Result<Vec<Event>, ActionError> {
        self.zoning
            .ensure_permitted(self.player_cell, cell, FarmingAction::Watering)?;
        let water = self.planting.water_crop(cell)?;
        Ok(occur![water(),])
    }
}
