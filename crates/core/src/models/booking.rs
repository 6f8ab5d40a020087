use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{appointment::Appointment, time_slot::SlotAvailability};

/// Where the visitor is in the booking flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum FlowState {
    Idle,
    #[serde(rename_all = "camelCase")]
    SlotSelected { date: NaiveDate, time: String },
}

impl FlowState {
    pub fn is_idle(&self) -> bool {
        matches!(self, FlowState::Idle)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectSlotRequest {
    pub date: NaiveDate,
    pub time: String,
    /// Same anchor the calendar was rendered for; defaults to the server's
    /// local date
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResponse {
    #[serde(flatten)]
    pub state: FlowState,
    /// `dd/MM/yyyy` rendering of the selected date
    pub display_date: Option<String>,
}

/// One bookable date with every configured slot annotated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub display_date: String,
    pub heading: String,
    pub slots: Vec<SlotAvailability>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub today: NaiveDate,
    pub days: Vec<CalendarDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub date: NaiveDate,
    pub time: String,
    pub available: bool,
}

/// Result of a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub appointment: Appointment,
    pub message: String,
    pub whatsapp_url: String,
}
