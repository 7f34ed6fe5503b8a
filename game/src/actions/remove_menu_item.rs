use crate::api::{ActionError, Event};
use crate::{occur, Game};

impl Game {
    pub(crate) fn remove_menu_item(&mut self, index: usize) -> Result<Vec<Event>, ActionError> {
        let remove = self.serving.remove_menu_item(index)?;
        Ok(occur![remove(),])
    }
}
