pub mod create_calendar;
pub mod sleep;
