use serde::{Deserialize, Serialize};

pub use crate::collections::{Sequence, Shared};
use crate::inventory::{ItemKey, ItemKind};

pub const MENU_CAPACITY: usize = 5;
pub const SPAWN_INTERVAL: f32 = 10.0;
pub const ARRIVING_TIME: f32 = 3.0;
pub const EATING_TIME: f32 = 2.0;
pub const LEAVING_TIME: f32 = 3.0;
pub const MIN_PATIENCE: f32 = 45.0;
pub const MAX_PATIENCE: f32 = 90.0;

pub const CUSTOMER_NAMES: [&str; 8] = [
    "Mabel", "Otis", "Greta", "Bruno", "Ida", "Casper", "Nellie", "Ward",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Waiting,
    Ready,
    Completed,
    Failed,
}

pub struct Order {
    pub id: OrderId,
    pub item: ItemKey,
    pub price: u32,
    /// Set when the customer sits down; the patience clock starts there,
    /// not at spawn.
    pub placed_at: f32,
    pub patience: f32,
    pub status: OrderStatus,
}

impl Order {
    pub fn time_remaining(&self, now: f32) -> f32 {
        (self.patience - (now - self.placed_at)).max(0.0)
    }

    pub fn is_expired(&self, now: f32) -> bool {
        self.time_remaining(now) == 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CustomerPhase {
    Arriving { remaining: f32 },
    Seated,
    Eating { remaining: f32 },
    Leaving { remaining: f32 },
}

/// The customer owns its order; one leaves the restaurant only together
/// with the other.
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub seat: usize,
    pub order: Order,
    pub phase: CustomerPhase,
}

pub struct MenuItem {
    pub item: Shared<ItemKind>,
    pub price: u32,
    pub available: bool,
}

pub struct ServingDomain {
    pub open: bool,
    pub menu: Vec<MenuItem>,
    pub seats: usize,
    pub customers: Vec<Customer>,
    pub customers_id: Sequence,
    pub spawn_timer: f32,
    pub time: f32,
    pub customers_served: u32,
    pub total_earnings: u32,
}

impl Default for ServingDomain {
    fn default() -> Self {
        Self {
            open: false,
            menu: vec![],
            seats: 4,
            customers: vec![],
            customers_id: Sequence::default(),
            spawn_timer: 0.0,
            time: 0.0,
            customers_served: 0,
            total_earnings: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Serving {
    MenuUpdated {
        menu: Vec<(ItemKey, u32)>,
    },
    RestaurantOpened,
    RestaurantClosed,
    CustomerAppeared {
        customer: CustomerId,
        name: String,
        seat: usize,
    },
    CustomerSeated {
        customer: CustomerId,
        order: OrderId,
        item: ItemKey,
        price: u32,
    },
    OrderCompleted {
        customer: CustomerId,
        order: OrderId,
        payment: u32,
    },
    OrderFailed {
        customer: CustomerId,
        order: OrderId,
    },
    CustomerVanished {
        customer: CustomerId,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub enum ServingError {
    MenuIsFull,
    MenuIsEmpty,
    ItemAlreadyOnMenu { item: ItemKey },
    MenuEntryNotFound { index: usize },
    ItemNotOnMenu { item: ItemKey },
    OrderNotFound { order: OrderId },
    OrderExpired { order: OrderId },
    WrongFood { order: OrderId, item: ItemKey },
    CustomerNotSeated { customer: CustomerId },
}

impl ServingDomain {
    pub fn get_customer_with_order(&self, order: OrderId) -> Result<&Customer, ServingError> {
        self.customers
            .iter()
            .find(|customer| customer.order.id == order)
            .ok_or(ServingError::OrderNotFound { order })
    }

    pub fn menu_snapshot(&self) -> Vec<(ItemKey, u32)> {
        self.menu
            .iter()
            .map(|entry| (entry.item.id, entry.price))
            .collect()
    }
}
