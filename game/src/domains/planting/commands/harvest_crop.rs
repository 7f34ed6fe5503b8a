use rand::Rng;

use crate::planting::{Cell, Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    /// Removes the crop and rolls the yield. The soil stays tilled; the
    /// produced items reach an inventory only through a separate pickup.
    pub fn harvest_crop<'operation>(
        &'operation mut self,
        cell: Cell,
        mut random: impl Rng + 'operation,
    ) -> Result<impl FnOnce() -> Vec<Planting> + 'operation, PlantingError> {
        let crop = self.get_crop(cell)?;
        if !crop.is_harvestable() {
            return Err(PlantingError::NotReadyToHarvest {
                cell,
                stage: crop.stage,
            });
        }
        let operation = move || {
            let crop = self.crops.remove(&cell).unwrap();
            let quantity = random.gen_range(crop.kind.min_harvest..=crop.kind.max_harvest);
            vec![Planting::CropHarvested {
                cell,
                item: crop.kind.fruit,
                quantity,
            }]
        };
        Ok(operation)
    }
}
