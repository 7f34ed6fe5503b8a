pub mod api;
pub mod collections;
pub mod data;

mod actions;
mod domains;
mod update;

pub use domains::*;

use crate::api::{Action, ActionError, Event};
use crate::cooking::{CookingDomain, StationId};
use crate::data::{DataError, Knowledge};
use crate::inventory::{ContainerId, ContainerOwner, InventoryDomain};
use crate::planting::{Cell, PlantingDomain};
use crate::serving::ServingDomain;
use crate::timing::{CalendarId, TimingDomain};
use crate::zoning::ZoningDomain;

/// Seconds between rain watering passes while the weather holds.
pub const RAIN_WATERING_INTERVAL: f32 = 2.0;

pub struct Game {
    pub known: Knowledge,
    pub timing: TimingDomain,
    pub inventory: InventoryDomain,
    pub planting: PlantingDomain,
    pub zoning: ZoningDomain,
    pub serving: ServingDomain,
    pub cooking: CookingDomain,
    pub calendar: CalendarId,
    pub player: ContainerId,
    pub player_cell: Cell,
    pub money: u32,
    rain_timer: f32,
}

impl Game {
    /// Requires a "standard" calendar kind and a "player" container kind in
    /// the content.
    pub fn new(known: Knowledge) -> Result<Game, DataError> {
        let mut timing = TimingDomain::default();
        let calendar_kind = known.calendars.find("standard")?;
        let (calendar, create_calendar) = timing.create_calendar(&calendar_kind);
        create_calendar();
        let mut inventory = InventoryDomain::default();
        let player_kind = known.containers.find("player")?;
        let (player, create_player) = inventory.create_container(&player_kind, ContainerOwner::Player);
        create_player();
        Ok(Game {
            known,
            timing,
            inventory,
            planting: PlantingDomain::default(),
            zoning: ZoningDomain::default(),
            serving: ServingDomain::default(),
            cooking: CookingDomain::default(),
            calendar,
            player,
            player_cell: [0, 0],
            money: 0,
            rain_timer: 0.0,
        })
    }

    pub fn perform_action(&mut self, action: Action) -> Result<Vec<Event>, ActionError> {
        match action {
            Action::TillSoil { cell } => self.till_soil(cell),
            Action::PlantCrop { cell, seed } => self.plant_crop(cell, seed),
            Action::WaterCrop { cell } => self.water_crop(cell),
            Action::HarvestCrop { cell } => self.harvest_crop(cell),
            Action::PickupItem { item, amount } => self.pickup_item(item, amount),
            Action::TransferItem {
                source,
                source_slot,
                destination,
                target,
            } => self.transfer_item(source, source_slot, destination, target),
            Action::SwapSlots { container, a, b } => self.swap_slots(container, a, b),
            Action::ClearSlot { container, slot } => self.clear_slot(container, slot),
            Action::Sleep => self.sleep(),
            Action::OpenRestaurant => self.open_restaurant(),
            Action::CloseRestaurant => self.close_restaurant(),
            Action::AddMenuItem { item, price } => self.add_menu_item(item, price),
            Action::RemoveMenuItem { index } => self.remove_menu_item(index),
            Action::ServeOrder { order } => self.serve_order(order),
            Action::StartCooking { station, recipe } => self.start_cooking(station, recipe),
        }
    }

    /// Movement collaborator feeds the zone occupancy check through here.
    pub fn set_player_position(&mut self, cell: Cell) {
        self.player_cell = cell;
    }

    pub fn create_chest(&mut self, kind: &str) -> Result<(ContainerId, Vec<Event>), ActionError> {
        let kind = self.known.containers.find(kind)?;
        let (id, create) = self.inventory.create_container(&kind, ContainerOwner::Chest);
        Ok((id, vec![create().into()]))
    }

    pub fn install_station(&mut self) -> (StationId, Vec<Event>) {
        let (id, create) = self.cooking.create_station();
        (id, vec![create().into()])
    }
}
