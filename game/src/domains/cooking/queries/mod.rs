pub mod can_craft;
