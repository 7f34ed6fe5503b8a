pub mod create_station;
pub mod start_cooking;
