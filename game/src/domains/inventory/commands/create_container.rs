use crate::collections::Shared;
use crate::inventory::{
    Container, ContainerId, ContainerKind, ContainerOwner, Inventory, InventoryDomain, Slot,
};

impl InventoryDomain {
    pub fn create_container<'operation>(
        &'operation mut self,
        kind: &Shared<ContainerKind>,
        owner: ContainerOwner,
    ) -> (ContainerId, impl FnOnce() -> Vec<Inventory> + 'operation) {
        let id = self.containers_id.introduce().one(ContainerId);
        let kind = kind.clone();
        let operation = move || {
            let container = Container {
                id,
                owner,
                slots: vec![Slot::default(); kind.capacity],
                kind,
            };
            self.containers.insert(id, container);
            self.containers_id.register(id.0);
            vec![Inventory::ContainerCreated { id }]
        };
        (id, operation)
    }
}
