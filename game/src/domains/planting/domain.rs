use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

pub use crate::collections::Shared;
use crate::inventory::ItemKey;

pub type Cell = [i32; 2];

#[derive(Default)]
pub struct PlantingDomain {
    pub tilled: HashSet<Cell>,
    /// One crop per cell; the cell is the identity.
    pub crops: HashMap<Cell, Crop>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CropKey(pub usize);

#[derive(Debug, Deserialize)]
pub struct GrowthStage {
    pub name: String,
    pub days_to_next: f32,
    pub requires_water: bool,
}

pub struct CropKind {
    pub id: CropKey,
    pub name: String,
    pub stages: Vec<GrowthStage>,
    pub fruit: ItemKey,
    pub min_harvest: u32,
    pub max_harvest: u32,
}

impl CropKind {
    pub fn last_stage(&self) -> usize {
        self.stages.len() - 1
    }
}

pub struct Crop {
    pub cell: Cell,
    pub kind: Shared<CropKind>,
    pub stage: usize,
    pub progress: f32,
    pub watered: bool,
    pub planted_day: u32,
}

impl Crop {
    pub fn is_harvestable(&self) -> bool {
        self.stage == self.kind.last_stage()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Planting {
    CellTilled {
        cell: Cell,
    },
    CropAppeared {
        cell: Cell,
        key: CropKey,
    },
    CropUpdated {
        cell: Cell,
        stage: usize,
        watered: bool,
    },
    CropHarvested {
        cell: Cell,
        item: ItemKey,
        quantity: u32,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub enum PlantingError {
    CellAlreadyTilled { cell: Cell },
    CellNotTilled { cell: Cell },
    CellOccupied { cell: Cell },
    CropNotFound { cell: Cell },
    NotReadyToHarvest { cell: Cell, stage: usize },
}

impl PlantingDomain {
    pub fn get_crop(&self, cell: Cell) -> Result<&Crop, PlantingError> {
        self.crops
            .get(&cell)
            .ok_or(PlantingError::CropNotFound { cell })
    }

    pub fn is_tilled(&self, cell: Cell) -> bool {
        self.tilled.contains(&cell)
    }
}
