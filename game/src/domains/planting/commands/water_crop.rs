use crate::planting::{Cell, Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    /// Crops in the terminal stage ignore watering; the command still
    /// succeeds so the watering tool stays responsive over a ripe field.
    pub fn water_crop<'operation>(
        &'operation mut self,
        cell: Cell,
    ) -> Result<impl FnOnce() -> Vec<Planting> + 'operation, PlantingError> {
        self.get_crop(cell)?;
        let operation = move || {
            let crop = self.crops.get_mut(&cell).unwrap();
            if crop.is_harvestable() {
                return vec![];
            }
            crop.watered = true;
            vec![Planting::CropUpdated {
                cell,
                stage: crop.stage,
                watered: crop.watered,
            }]
        };
        Ok(operation)
    }
}
