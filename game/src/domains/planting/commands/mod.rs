pub mod create_crop;
pub mod harvest_crop;
pub mod till_cell;
pub mod water_crop;
