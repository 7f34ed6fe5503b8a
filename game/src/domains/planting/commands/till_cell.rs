use crate::planting::{Cell, Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn till_cell<'operation>(
        &'operation mut self,
        cell: Cell,
    ) -> Result<impl FnOnce() -> Vec<Planting> + 'operation, PlantingError> {
        if self.tilled.contains(&cell) {
            return Err(PlantingError::CellAlreadyTilled { cell });
        }
        let operation = move || {
            self.tilled.insert(cell);
            vec![Planting::CellTilled { cell }]
        };
        Ok(operation)
    }
}
