pub mod commands;
pub mod domain;
pub mod queries;
pub mod update;

pub use domain::*;
