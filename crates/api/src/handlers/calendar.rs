//! # Calendar Handlers
//!
//! Read-only views of the bookable window: the configured time slots, the
//! annotated four-week calendar and single-slot availability checks.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;
use slotbook_core::{
    calendar,
    errors::BookingError,
    models::{
        booking::{AvailabilityResponse, CalendarResponse},
        time_slot::TimeSlot,
    },
};
use std::sync::Arc;

use crate::{ApiState, local_today, middleware::error_handling::AppError};

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    /// Anchor date for the window; defaults to the server's local date
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
    pub time: String,
}

pub async fn list_time_slots() -> Json<&'static [TimeSlot]> {
    Json(calendar::time_slots())
}

/// Returns every bookable date with each slot marked open or taken.
///
/// ```text
/// GET /api/calendar?today=2024-06-05
/// ```
#[axum::debug_handler]
pub async fn get_calendar(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let today = query.today.unwrap_or_else(local_today);
    let session = state.session.lock().await;

    Ok(Json(session.calendar(today)?))
}

#[axum::debug_handler]
pub async fn check_availability(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    if calendar::find_time_slot(&query.time).is_none() {
        return Err(AppError(BookingError::Validation(format!(
            "{} is not a bookable time",
            query.time
        ))));
    }

    let session = state.session.lock().await;
    let available = session.is_available(query.date, &query.time);

    Ok(Json(AvailabilityResponse {
        date: query.date,
        time: query.time,
        available,
    }))
}
