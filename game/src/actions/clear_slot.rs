use crate::api::{ActionError, Event};
use crate::inventory::ContainerId;
use crate::{occur, Game};

impl Game {
    pub(crate) fn clear_slot(
        &mut self,
        container: ContainerId,
        slot: usize,
    ) -> Result<Vec<Event>, ActionError> {
        let clear = self.inventory.clear_slot(container, slot)?;
        Ok(occur![clear(),])
    }
}
