pub mod commands;
pub mod domain;
pub mod update;

pub use domain::*;
