//! Availability of slots against the booked appointments.
//!
//! A slot is open unless an appointment already holds the same calendar day
//! and the same time string. Checks are a plain linear scan; the volumes are
//! tens of slots.

use chrono::NaiveDate;

use crate::{
    calendar,
    models::{appointment::Appointment, time_slot::SlotAvailability},
};

pub fn is_slot_available(appointments: &[Appointment], date: NaiveDate, time: &str) -> bool {
    !appointments
        .iter()
        .any(|appointment| appointment.occupies(date, time))
}

/// Annotates every configured slot of `date`.
pub fn day_availability(appointments: &[Appointment], date: NaiveDate) -> Vec<SlotAvailability> {
    calendar::time_slots()
        .iter()
        .map(|slot| SlotAvailability {
            time: slot.time.to_string(),
            label: slot.label.to_string(),
            available: is_slot_available(appointments, date, slot.time),
        })
        .collect()
}
