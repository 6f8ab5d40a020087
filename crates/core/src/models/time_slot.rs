use serde::{Deserialize, Serialize};

/// A fixed time of day offered on every bookable date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    /// 24-hour `HH:MM` key stored on appointments
    pub time: &'static str,
    /// Human-facing label
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAvailability {
    pub time: String,
    pub label: String,
    pub available: bool,
}
