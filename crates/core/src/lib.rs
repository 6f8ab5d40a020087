//! # SlotBook Core
//!
//! Domain types and pure functions for the booking service: the fixed slot
//! calendar, availability checks against booked appointments, Spanish date
//! formatting and the WhatsApp confirmation link.

pub mod availability;
pub mod calendar;
pub mod errors;
pub mod locale;
pub mod models;
pub mod notification;
