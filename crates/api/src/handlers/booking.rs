//! # Booking Handlers
//!
//! Drive the booking flow: select a slot, then either cancel or submit the
//! contact form. A successful submission records the appointment and returns
//! the WhatsApp link the client should open.

use axum::{Json, extract::State, http::StatusCode};
use slotbook_core::{
    locale,
    models::{
        appointment::{Appointment, BookingDetails},
        booking::{BookingConfirmation, FlowState, SelectSlotRequest, SelectionResponse},
    },
};
use std::sync::Arc;
use tracing::info;

use crate::{ApiState, local_today, middleware::error_handling::AppError};

fn selection_response(state: &FlowState) -> SelectionResponse {
    let display_date = match state {
        FlowState::SlotSelected { date, .. } => Some(locale::format_numeric(*date)),
        FlowState::Idle => None,
    };

    SelectionResponse {
        state: state.clone(),
        display_date,
    }
}

pub async fn get_selection(State(state): State<Arc<ApiState>>) -> Json<SelectionResponse> {
    let session = state.session.lock().await;
    Json(selection_response(session.state()))
}

#[axum::debug_handler]
pub async fn select_slot(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<SelectSlotRequest>,
) -> Result<Json<SelectionResponse>, AppError> {
    let mut session = state.session.lock().await;
    let today = payload.today.unwrap_or_else(local_today);
    let flow = session.select_slot(today, payload.date, &payload.time)?;

    Ok(Json(selection_response(flow)))
}

pub async fn cancel_selection(State(state): State<Arc<ApiState>>) -> Json<SelectionResponse> {
    let mut session = state.session.lock().await;
    session.cancel();

    Json(selection_response(session.state()))
}

#[axum::debug_handler]
pub async fn submit_booking(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<BookingDetails>,
) -> Result<(StatusCode, Json<BookingConfirmation>), AppError> {
    let mut session = state.session.lock().await;
    let confirmation = session.submit(payload)?;

    info!(id = %confirmation.appointment.id, "Booking confirmed");

    Ok((StatusCode::CREATED, Json(confirmation)))
}

pub async fn list_appointments(State(state): State<Arc<ApiState>>) -> Json<Vec<Appointment>> {
    let session = state.session.lock().await;
    Json(session.appointments())
}
