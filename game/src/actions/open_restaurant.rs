use crate::api::{ActionError, Event};
use crate::{occur, Game};

impl Game {
    pub(crate) fn open_restaurant(&mut self) -> Result<Vec<Event>, ActionError> {
        let open = self.serving.open_restaurant()?;
        Ok(occur![open(),])
    }
}
