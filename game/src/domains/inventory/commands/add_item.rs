use crate::collections::Shared;
use crate::inventory::{ContainerId, Inventory, InventoryDomain, InventoryError, ItemKind};

impl InventoryDomain {
    /// Stackable items merge into the first stack of the same kind, anything
    /// else takes the first empty slot. `max_stack` is presentation data and
    /// does not cap the merge.
    pub fn add_item<'operation>(
        &'operation mut self,
        id: ContainerId,
        kind: &Shared<ItemKind>,
        amount: u32,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + 'operation, InventoryError> {
        let container = self.get_container(id)?;
        let index = container.position_for(kind)?;
        let kind = kind.clone();
        let operation = move || {
            let container = self.containers.get_mut(&id).unwrap();
            let slot = &mut container.slots[index];
            if slot.is_empty() {
                slot.item = Some(kind);
                slot.amount = amount;
            } else {
                slot.amount += amount;
            }
            vec![Inventory::SlotUpdated {
                container: id,
                slot: index,
                item: slot.key(),
                amount: slot.amount,
            }]
        };
        Ok(operation)
    }
}
