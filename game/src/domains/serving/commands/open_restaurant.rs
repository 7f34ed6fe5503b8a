use crate::serving::{Serving, ServingDomain, ServingError};

impl ServingDomain {
    pub fn open_restaurant<'operation>(
        &'operation mut self,
    ) -> Result<impl FnOnce() -> Vec<Serving> + 'operation, ServingError> {
        if self.menu.is_empty() {
            return Err(ServingError::MenuIsEmpty);
        }
        let operation = move || {
            self.open = true;
            self.spawn_timer = 0.0;
            vec![Serving::RestaurantOpened]
        };
        Ok(operation)
    }
}
