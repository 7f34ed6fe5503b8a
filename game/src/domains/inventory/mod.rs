pub mod commands;
pub mod domain;
pub mod queries;

pub use domain::*;
