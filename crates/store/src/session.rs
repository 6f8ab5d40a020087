//! # Booking Session
//!
//! Owns the appointment store and the visitor's position in the booking flow:
//!
//! ```text
//! Idle --select_slot--> SlotSelected --submit/cancel--> Idle
//! ```
//!
//! A slot is only selectable while open, and availability is checked again on
//! submission so the store never receives two appointments for one slot
//! through this session. Failed operations leave both the store and the
//! selection untouched.

use chrono::NaiveDate;
use slotbook_core::{
    availability,
    calendar,
    errors::{BookingError, BookingResult},
    locale,
    models::{
        appointment::{Appointment, BookingDetails},
        booking::{BookingConfirmation, CalendarDay, CalendarResponse, FlowState},
    },
    notification,
};
use tracing::{debug, info, warn};

use crate::repository::AppointmentRepository;

pub struct BookingSession<R> {
    repository: R,
    state: FlowState,
    business_number: String,
}

impl<R: AppointmentRepository> BookingSession<R> {
    /// Creates an idle session over `repository`, notifying `business_number`.
    pub fn new(repository: R, business_number: impl Into<String>) -> Self {
        Self {
            repository,
            state: FlowState::Idle,
            business_number: business_number.into(),
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn business_number(&self) -> &str {
        &self.business_number
    }

    pub fn appointments(&self) -> Vec<Appointment> {
        self.repository.list()
    }

    pub fn is_available(&self, date: NaiveDate, time: &str) -> bool {
        availability::is_slot_available(&self.repository.list(), date, time)
    }

    /// The bookable window for `today` annotated against the store.
    ///
    /// # Errors
    ///
    /// * `BookingError::Validation` - the window for `today` falls outside
    ///   the representable date range
    pub fn calendar(&self, today: NaiveDate) -> BookingResult<CalendarResponse> {
        let window = calendar::booking_window(today).ok_or_else(|| {
            BookingError::Validation(format!("{} is out of the supported date range", today))
        })?;
        let appointments = self.repository.list();

        let days = window
            .into_iter()
            .map(|date| CalendarDay {
                date,
                display_date: locale::format_numeric(date),
                heading: locale::format_day_heading(date),
                slots: availability::day_availability(&appointments, date),
            })
            .collect();

        Ok(CalendarResponse { today, days })
    }

    /// Opens the form for `(date, time)`, replacing any earlier selection.
    ///
    /// # Errors
    ///
    /// * `BookingError::Validation` - `time` is not a configured slot or
    ///   `date` is outside the window for `today`
    /// * `BookingError::SlotTaken` - an appointment already holds the slot
    pub fn select_slot(
        &mut self,
        today: NaiveDate,
        date: NaiveDate,
        time: &str,
    ) -> BookingResult<&FlowState> {
        if calendar::find_time_slot(time).is_none() {
            return Err(BookingError::Validation(format!(
                "{} is not a bookable time",
                time
            )));
        }

        if !calendar::is_bookable_date(today, date) {
            return Err(BookingError::Validation(format!(
                "{} is not a bookable date",
                date
            )));
        }

        if !self.is_available(date, time) {
            warn!(%date, time, "Rejected selection of a taken slot");
            return Err(BookingError::SlotTaken(format!("{} {}", date, time)));
        }

        debug!(%date, time, "Slot selected");
        self.state = FlowState::SlotSelected {
            date,
            time: time.to_string(),
        };

        Ok(&self.state)
    }

    /// Discards the selection without touching the store.
    pub fn cancel(&mut self) {
        if !self.state.is_idle() {
            debug!("Selection cancelled");
        }
        self.state = FlowState::Idle;
    }

    /// Records an appointment for the selected slot and returns the
    /// WhatsApp hand-off.
    ///
    /// # Errors
    ///
    /// * `BookingError::NoSelection` - no slot is selected
    /// * `BookingError::Validation` - a required field is missing
    /// * `BookingError::SlotTaken` - the slot was booked since selection
    pub fn submit(&mut self, details: BookingDetails) -> BookingResult<BookingConfirmation> {
        let (date, time) = match &self.state {
            FlowState::SlotSelected { date, time } => (*date, time.clone()),
            FlowState::Idle => return Err(BookingError::NoSelection),
        };

        details.validate()?;

        if !self.is_available(date, &time) {
            warn!(%date, time = %time, "Rejected submission for a taken slot");
            return Err(BookingError::SlotTaken(format!("{} {}", date, time)));
        }

        let message = notification::confirmation_message(&details, date, &time);
        let whatsapp_url = notification::link_for_message(&self.business_number, &message);
        let appointment = Appointment::new(date, time, details);

        self.repository.append(appointment.clone());
        self.state = FlowState::Idle;

        info!(
            id = %appointment.id,
            date = %appointment.date,
            time = %appointment.time,
            "Appointment booked"
        );

        Ok(BookingConfirmation {
            appointment,
            message,
            whatsapp_url,
        })
    }
}
