use crate::api::{ActionError, Event};
use crate::inventory::ItemKey;
use crate::{occur, Game};

impl Game {
    pub(crate) fn add_menu_item(&mut self, item: ItemKey, price: u32) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.items.get(item)?;
        let add = self.serving.add_menu_item(&kind, price)?;
        Ok(occur![add(),])
    }
}
