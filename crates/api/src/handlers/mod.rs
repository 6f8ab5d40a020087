pub mod booking;
pub mod calendar;
