use serde::{Deserialize, Serialize};

use crate::planting::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FarmingAction {
    Tilling,
    Planting,
    Watering,
    Harvesting,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Zone {
    pub name: String,
    pub min: Cell,
    pub max: Cell,
    pub tilling: bool,
    pub planting: bool,
    pub watering: bool,
    pub harvesting: bool,
}

impl Zone {
    pub fn contains(&self, cell: Cell) -> bool {
        cell[0] >= self.min[0]
            && cell[0] <= self.max[0]
            && cell[1] >= self.min[1]
            && cell[1] <= self.max[1]
    }

    pub fn allows(&self, action: FarmingAction) -> bool {
        match action {
            FarmingAction::Tilling => self.tilling,
            FarmingAction::Planting => self.planting,
            FarmingAction::Watering => self.watering,
            FarmingAction::Harvesting => self.harvesting,
        }
    }
}

pub struct ZoningDomain {
    pub require_zone: bool,
    pub zones: Vec<Zone>,
}

impl Default for ZoningDomain {
    fn default() -> Self {
        Self {
            require_zone: true,
            zones: vec![],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub enum ZoningError {
    OutsideAnyZone {
        player: Cell,
    },
    TargetOutOfZone {
        zone: String,
        target: Cell,
    },
    ActionNotAllowed {
        zone: String,
        action: FarmingAction,
    },
}
