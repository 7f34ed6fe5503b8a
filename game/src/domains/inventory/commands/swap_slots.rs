use crate::inventory::{ContainerId, Inventory, InventoryDomain, InventoryError};

impl InventoryDomain {
    pub fn swap_slots<'operation>(
        &'operation mut self,
        id: ContainerId,
        a: usize,
        b: usize,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + 'operation, InventoryError> {
        let container = self.get_container(id)?;
        container.ensure_slot(a)?;
        container.ensure_slot(b)?;
        let operation = move || {
            let container = self.containers.get_mut(&id).unwrap();
            container.slots.swap(a, b);
            vec![
                Inventory::SlotUpdated {
                    container: id,
                    slot: a,
                    item: container.slots[a].key(),
                    amount: container.slots[a].amount,
                },
                Inventory::SlotUpdated {
                    container: id,
                    slot: b,
                    item: container.slots[b].key(),
                    amount: container.slots[b].amount,
                },
            ]
        };
        Ok(operation)
    }

    pub fn clear_slot<'operation>(
        &'operation mut self,
        id: ContainerId,
        slot: usize,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + 'operation, InventoryError> {
        let container = self.get_container(id)?;
        container.ensure_slot(slot)?;
        let operation = move || {
            let container = self.containers.get_mut(&id).unwrap();
            container.slots[slot].item = None;
            container.slots[slot].amount = 0;
            vec![Inventory::SlotUpdated {
                container: id,
                slot,
                item: None,
                amount: 0,
            }]
        };
        Ok(operation)
    }
}
