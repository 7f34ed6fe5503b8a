use std::mem;

use crate::inventory::{
    ContainerId, Inventory, InventoryDomain, InventoryError, TransferDestination,
};

impl InventoryDomain {
    /// Cross-container protocol. A specific destination slot swaps with
    /// whatever occupies it, same kind included; merging happens only on
    /// `TransferDestination::Any`, which places like `add_item` and aborts
    /// with the source untouched when the destination is full.
    pub fn transfer_item<'operation>(
        &'operation mut self,
        source: ContainerId,
        source_slot: usize,
        destination: ContainerId,
        target: TransferDestination,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + 'operation, InventoryError> {
        let source_container = self.get_container(source)?;
        let slot = source_container.ensure_slot(source_slot)?;
        if slot.is_empty() {
            return Err(InventoryError::SlotIsEmpty {
                container: source,
                slot: source_slot,
            });
        }
        let kind = slot.item.clone().unwrap();
        let destination_container = self.get_container(destination)?;
        let index = match target {
            TransferDestination::Slot(index) => {
                destination_container.ensure_slot(index)?;
                index
            }
            TransferDestination::Any => destination_container.position_for(&kind)?,
        };
        let merge = match target {
            TransferDestination::Any => !destination_container.slots[index].is_empty(),
            TransferDestination::Slot(_) => false,
        };
        let operation = move || {
            if source == destination {
                if source_slot == index {
                    return vec![];
                }
                let container = self.containers.get_mut(&source).unwrap();
                if merge {
                    let amount = mem::take(&mut container.slots[source_slot]).amount;
                    container.slots[index].amount += amount;
                } else {
                    container.slots.swap(source_slot, index);
                }
                return vec![
                    Inventory::SlotUpdated {
                        container: source,
                        slot: source_slot,
                        item: container.slots[source_slot].key(),
                        amount: container.slots[source_slot].amount,
                    },
                    Inventory::SlotUpdated {
                        container: source,
                        slot: index,
                        item: container.slots[index].key(),
                        amount: container.slots[index].amount,
                    },
                ];
            }
            let taken = {
                let container = self.containers.get_mut(&source).unwrap();
                mem::take(&mut container.slots[source_slot])
            };
            let displaced = {
                let container = self.containers.get_mut(&destination).unwrap();
                let slot = &mut container.slots[index];
                if merge {
                    slot.amount += taken.amount;
                    Default::default()
                } else {
                    mem::replace(slot, taken)
                }
            };
            {
                let container = self.containers.get_mut(&source).unwrap();
                container.slots[source_slot] = displaced;
            }
            let source_container = &self.containers[&source];
            let destination_container = &self.containers[&destination];
            vec![
                Inventory::SlotUpdated {
                    container: source,
                    slot: source_slot,
                    item: source_container.slots[source_slot].key(),
                    amount: source_container.slots[source_slot].amount,
                },
                Inventory::SlotUpdated {
                    container: destination,
                    slot: index,
                    item: destination_container.slots[index].key(),
                    amount: destination_container.slots[index].amount,
                },
            ]
        };
        Ok(operation)
    }
}
