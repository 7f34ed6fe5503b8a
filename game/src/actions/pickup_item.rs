use crate::api::{ActionError, Event};
use crate::inventory::ItemKey;
use crate::{occur, Game};

impl Game {
    pub(crate) fn pickup_item(&mut self, item: ItemKey, amount: u32) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.items.get(item)?;
        let add = self.inventory.add_item(self.player, &kind, amount)?;
        Ok(occur![add(),])
    }
}
