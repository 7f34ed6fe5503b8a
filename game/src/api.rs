use serde::{Deserialize, Serialize};

use crate::collections::DictionaryError;
use crate::cooking::{Cooking, CookingError, RecipeKey, StationId};
use crate::inventory::{ContainerId, Inventory, InventoryError, ItemKey, TransferDestination};
use crate::planting::{Cell, Planting, PlantingError};
use crate::serving::{OrderId, Serving, ServingError};
use crate::timing::{Timing, TimingError};
use crate::zoning::ZoningError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Action {
    TillSoil {
        cell: Cell,
    },
    PlantCrop {
        cell: Cell,
        seed: ItemKey,
    },
    WaterCrop {
        cell: Cell,
    },
    HarvestCrop {
        cell: Cell,
    },
    PickupItem {
        item: ItemKey,
        amount: u32,
    },
    TransferItem {
        source: ContainerId,
        source_slot: usize,
        destination: ContainerId,
        target: TransferDestination,
    },
    SwapSlots {
        container: ContainerId,
        a: usize,
        b: usize,
    },
    ClearSlot {
        container: ContainerId,
        slot: usize,
    },
    Sleep,
    OpenRestaurant,
    CloseRestaurant,
    AddMenuItem {
        item: ItemKey,
        price: u32,
    },
    RemoveMenuItem {
        index: usize,
    },
    ServeOrder {
        order: OrderId,
    },
    StartCooking {
        station: StationId,
        recipe: RecipeKey,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    TimingStream(Vec<Timing>),
    InventoryStream(Vec<Inventory>),
    PlantingStream(Vec<Planting>),
    ServingStream(Vec<Serving>),
    CookingStream(Vec<Cooking>),
}

impl From<Vec<Timing>> for Event {
    fn from(events: Vec<Timing>) -> Self {
        Event::TimingStream(events)
    }
}

impl From<Vec<Inventory>> for Event {
    fn from(events: Vec<Inventory>) -> Self {
        Event::InventoryStream(events)
    }
}

impl From<Vec<Planting>> for Event {
    fn from(events: Vec<Planting>) -> Self {
        Event::PlantingStream(events)
    }
}

impl From<Vec<Serving>> for Event {
    fn from(events: Vec<Serving>) -> Self {
        Event::ServingStream(events)
    }
}

impl From<Vec<Cooking>> for Event {
    fn from(events: Vec<Cooking>) -> Self {
        Event::CookingStream(events)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub enum ActionError {
    Timing(TimingError),
    Inventory(InventoryError),
    Planting(PlantingError),
    Zoning(ZoningError),
    Serving(ServingError),
    Cooking(CookingError),
    Knowledge(DictionaryError),
    ItemCannotBePlanted { item: ItemKey },
}

impl From<TimingError> for ActionError {
    fn from(error: TimingError) -> Self {
        ActionError::Timing(error)
    }
}

impl From<InventoryError> for ActionError {
    fn from(error: InventoryError) -> Self {
        ActionError::Inventory(error)
    }
}

impl From<PlantingError> for ActionError {
    fn from(error: PlantingError) -> Self {
        ActionError::Planting(error)
    }
}

impl From<ZoningError> for ActionError {
    fn from(error: ZoningError) -> Self {
        ActionError::Zoning(error)
    }
}

impl From<ServingError> for ActionError {
    fn from(error: ServingError) -> Self {
        ActionError::Serving(error)
    }
}

impl From<CookingError> for ActionError {
    fn from(error: CookingError) -> Self {
        ActionError::Cooking(error)
    }
}

impl From<DictionaryError> for ActionError {
    fn from(error: DictionaryError) -> Self {
        ActionError::Knowledge(error)
    }
}

#[macro_export]
macro_rules! occur {
    () => (
        vec![]
    );
    ($($event:expr,)*) => (
        vec![$($event.into(),)*]
    );
    ($($event:expr),*) => (
        vec![$($event.into(),)*]
    );
}
