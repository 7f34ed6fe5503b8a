pub mod cooking;
pub mod inventory;
pub mod planting;
pub mod serving;
pub mod timing;
pub mod zoning;
