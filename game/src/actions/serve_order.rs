use crate::api::{ActionError, Event};
use crate::inventory::InventoryError;
use crate::serving::OrderId;
use crate::{occur, Game};

impl Game {
    /// Serves the ordered dish from the player inventory and credits the
    /// payment.
    pub(crate) fn serve_order(&mut self, order: OrderId) -> Result<Vec<Event>, ActionError> {
        let item = self.serving.get_customer_with_order(order)?.order.item;
        if !self.inventory.has_item(self.player, item)? {
            return Err(InventoryError::ItemNotFound {
                container: self.player,
                item,
            }
            .into());
        }
        let now = self.serving.time;
        let (payment, serve) = self.serving.serve_order(order, item, now)?;
        let consume = self.inventory.consume_item(self.player, item, 1)?;
        let events = occur![serve(), consume(),];
        self.money += payment;
        Ok(events)
    }
}
