pub mod add_menu_item;
pub mod close_restaurant;
pub mod open_restaurant;
pub mod serve_order;
