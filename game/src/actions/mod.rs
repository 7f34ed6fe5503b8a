mod add_menu_item;
mod clear_slot;
mod close_restaurant;
mod harvest_crop;
mod open_restaurant;
mod pickup_item;
mod plant_crop;
mod remove_menu_item;
mod serve_order;
mod sleep;
mod start_cooking;
mod swap_slots;
mod till_soil;
mod transfer_item;
mod water_crop;
