use crate::api::{ActionError, Event};
use crate::inventory::ContainerId;
use crate::{occur, Game};

impl Game {
    pub(crate) fn swap_slots(
        &mut self,
        container: ContainerId,
        a: usize,
        b: usize,
    ) -> Result<Vec<Event>, ActionError> {
        let swap = self.inventory.swap_slots(container, a, b)?;
        Ok(occur![swap(),])
    }
}
