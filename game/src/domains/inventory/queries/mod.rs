use crate::inventory::{ContainerId, InventoryDomain, InventoryError, ItemKey};

impl InventoryDomain {
    /// Sums the item across every slot of the container.
    pub fn get_amount(&self, id: ContainerId, item: ItemKey) -> Result<u32, InventoryError> {
        let container = self.get_container(id)?;
        Ok(container
            .slots
            .iter()
            .filter(|slot| slot.holds(item))
            .map(|slot| slot.amount)
            .sum())
    }

    pub fn has_item(&self, id: ContainerId, item: ItemKey) -> Result<bool, InventoryError> {
        Ok(self.get_amount(id, item)? > 0)
    }

    pub fn has_item_amount(
        &self,
        id: ContainerId,
        item: ItemKey,
        required: u32,
    ) -> Result<bool, InventoryError> {
        Ok(self.get_amount(id, item)? >= required)
    }
}
