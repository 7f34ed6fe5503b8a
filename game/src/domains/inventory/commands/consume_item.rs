use crate::inventory::{ContainerId, Inventory, InventoryDomain, InventoryError, ItemKey};

impl InventoryDomain {
    /// Decrements the first matching slot only, clamping at zero. The change
    /// notification fires even when no slot matched; listeners refresh
    /// unconditionally.
    pub fn consume_item<'operation>(
        &'operation mut self,
        id: ContainerId,
        item: ItemKey,
        amount: u32,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + 'operation, InventoryError> {
        self.get_container(id)?;
        let operation = move || {
            let container = self.containers.get_mut(&id).unwrap();
            let mut events = vec![];
            if let Some(index) = container.slots.iter().position(|slot| slot.holds(item)) {
                let slot = &mut container.slots[index];
                slot.amount = slot.amount.saturating_sub(amount);
                if slot.amount == 0 {
                    slot.item = None;
                }
                events.push(Inventory::SlotUpdated {
                    container: id,
                    slot: index,
                    item: slot.key(),
                    amount: slot.amount,
                });
            }
            events.push(Inventory::ContainerChanged { id });
            events
        };
        Ok(operation)
    }
}
