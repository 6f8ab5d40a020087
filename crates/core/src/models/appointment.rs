use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};

/// Contact details collected by the booking form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub name: String,
    pub last_name: String,
    pub phone: String,
    #[serde(default)]
    pub confirmed: bool,
}

impl BookingDetails {
    /// Checks that every field was filled in and presence was confirmed.
    ///
    /// Only presence is checked; the phone number is free text.
    pub fn validate(&self) -> BookingResult<()> {
        let required = [
            ("name", &self.name),
            ("lastName", &self.last_name),
            ("phone", &self.phone),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(BookingError::Validation(format!("{} is required", field)));
            }
        }

        if !self.confirmed {
            return Err(BookingError::Validation(
                "Attendance must be confirmed".to_string(),
            ));
        }

        Ok(())
    }
}

/// A confirmed booking tied to one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub name: String,
    pub last_name: String,
    pub phone: String,
    pub confirmed: bool,
}

impl Appointment {
    /// Assembles a new appointment with a fresh identifier.
    pub fn new(date: NaiveDate, time: impl Into<String>, details: BookingDetails) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            time: time.into(),
            name: details.name,
            last_name: details.last_name,
            phone: details.phone,
            confirmed: details.confirmed,
        }
    }

    pub fn occupies(&self, date: NaiveDate, time: &str) -> bool {
        self.date == date && self.time == time
    }
}
