use crate::api::{ActionError, Event};
use crate::planting::Cell;
use crate::zoning::FarmingAction;
use crate::{occur, Game};

impl Game {
    pub(crate) fn till_soil(&mut self, cell: Cell) -> Result<Vec<Event>, ActionError> {
        self.zoning
            .ensure_permitted(self.player_cell, cell, FarmingAction::Tilling)?;
        let till = self.planting.till_cell(cell)?;
        Ok(occur![till(),])
    }
}
