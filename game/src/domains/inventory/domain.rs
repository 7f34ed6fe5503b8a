use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use crate::collections::{Sequence, Shared};
use crate::planting::CropKey;

#[derive(Default)]
pub struct InventoryDomain {
    pub containers: HashMap<ContainerId, Container>,
    pub containers_id: Sequence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Seed,
    Crop,
    Tool,
    Resource,
    CookedFood,
    Ingredient,
    Other,
}

pub struct ItemKind {
    pub id: ItemKey,
    pub name: String,
    pub category: ItemCategory,
    pub stackable: bool,
    pub max_stack: u32,
    pub buy_price: u32,
    pub sell_price: u32,
    /// Set on seed items; names the crop the seed grows into.
    pub crop: Option<CropKey>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerKey(pub usize);

pub struct ContainerKind {
    pub id: ContainerKey,
    pub name: String,
    pub capacity: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerOwner {
    Player,
    Chest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferDestination {
    Any,
    Slot(usize),
}

#[derive(Clone, Default)]
pub struct Slot {
    pub item: Option<Shared<ItemKind>>,
    pub amount: u32,
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    pub fn holds(&self, item: ItemKey) -> bool {
        match &self.item {
            Some(kind) => kind.id == item,
            None => false,
        }
    }

    pub fn key(&self) -> Option<ItemKey> {
        self.item.as_ref().map(|kind| kind.id)
    }
}

pub struct Container {
    pub id: ContainerId,
    pub kind: Shared<ContainerKind>,
    pub owner: ContainerOwner,
    /// Fixed length, `kind.capacity`; never grows or shrinks.
    pub slots: Vec<Slot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Inventory {
    ContainerCreated {
        id: ContainerId,
    },
    SlotUpdated {
        container: ContainerId,
        slot: usize,
        item: Option<ItemKey>,
        amount: u32,
    },
    ContainerChanged {
        id: ContainerId,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub enum InventoryError {
    ContainerNotFound {
        id: ContainerId,
    },
    ContainerIsFull {
        id: ContainerId,
    },
    SlotNotFound {
        container: ContainerId,
        slot: usize,
    },
    SlotIsEmpty {
        container: ContainerId,
        slot: usize,
    },
    ItemNotFound {
        container: ContainerId,
        item: ItemKey,
    },
}

impl InventoryDomain {
    pub fn get_container(&self, id: ContainerId) -> Result<&Container, InventoryError> {
        self.containers
            .get(&id)
            .ok_or(InventoryError::ContainerNotFound { id })
    }

    pub fn get_mut_container(&mut self, id: ContainerId) -> Result<&mut Container, InventoryError> {
        self.containers
            .get_mut(&id)
            .ok_or(InventoryError::ContainerNotFound { id })
    }
}

impl Container {
    pub fn ensure_slot(&self, slot: usize) -> Result<&Slot, InventoryError> {
        self.slots.get(slot).ok_or(InventoryError::SlotNotFound {
            container: self.id,
            slot,
        })
    }

    /// Placement for an incoming stack: the first existing stack of the same
    /// kind when stackable, otherwise the first empty slot.
    pub fn position_for(&self, kind: &ItemKind) -> Result<usize, InventoryError> {
        if kind.stackable {
            if let Some(index) = self.slots.iter().position(|slot| slot.holds(kind.id)) {
                return Ok(index);
            }
        }
        self.slots
            .iter()
            .position(|slot| slot.is_empty())
            .ok_or(InventoryError::ContainerIsFull { id: self.id })
    }
}
