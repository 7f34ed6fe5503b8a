use crate::collections::Shared;
use crate::planting::{Cell, Crop, CropKind, Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn create_crop<'operation>(
        &'operation mut self,
        cell: Cell,
        kind: &Shared<CropKind>,
        day: u32,
    ) -> Result<impl FnOnce() -> Vec<Planting> + 'operation, PlantingError> {
        if !self.tilled.contains(&cell) {
            return Err(PlantingError::CellNotTilled { cell });
        }
        if self.crops.contains_key(&cell) {
            return Err(PlantingError::CellOccupied { cell });
        }
        let kind = kind.clone();
        let operation = move || {
            let key = kind.id;
            let crop = Crop {
                cell,
                kind,
                stage: 0,
                progress: 0.0,
                watered: false,
                planted_day: day,
            };
            self.crops.insert(cell, crop);
            vec![Planting::CropAppeared { cell, key }]
        };
        Ok(operation)
    }
}
