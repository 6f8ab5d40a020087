pub mod appointment;
pub mod booking;
pub mod time_slot;
