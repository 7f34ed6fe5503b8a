use crate::api::{ActionError, Event};
use crate::inventory::{ContainerId, TransferDestination};
use crate::{occur, Game};

impl Game {
    pub(crate) fn transfer_item(
        &mut self,
        source: ContainerId,
        source_slot: usize,
        destination: ContainerId,
        target: TransferDestination,
    ) -> Result<Vec<Event>, ActionError> {
        let transfer = self
            .inventory
            .transfer_item(source, source_slot, destination, target)?;
        Ok(occur![transfer(),])
    }
}
