pub mod add_item;
pub mod consume_item;
pub mod create_container;
pub mod swap_slots;
pub mod transfer_item;
