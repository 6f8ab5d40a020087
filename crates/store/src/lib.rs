//! # SlotBook Store
//!
//! The append-only appointment store and the booking session that drives a
//! visitor from slot selection to a recorded appointment.

pub mod memory;
pub mod repository;
pub mod session;

pub mod mock;

pub use memory::InMemoryAppointmentStore;
pub use repository::AppointmentRepository;
pub use session::BookingSession;
