use crate::api::{ActionError, Event};
use crate::{occur, Game};

impl Game {
    pub(crate) fn close_restaurant(&mut self) -> Result<Vec<Event>, ActionError> {
        let close = self.serving.close_restaurant()?;
        Ok(occur![close(),])
    }
}
