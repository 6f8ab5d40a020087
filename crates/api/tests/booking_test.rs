use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use slotbook_api::{ApiState, app, local_today};
use slotbook_core::{
    calendar::booking_window,
    models::{
        appointment::Appointment,
        booking::{AvailabilityResponse, BookingConfirmation, CalendarResponse},
    },
    notification::DEFAULT_BUSINESS_NUMBER,
};

fn server() -> TestServer {
    let state = Arc::new(ApiState::new(DEFAULT_BUSINESS_NUMBER));
    TestServer::new(app(state)).expect("Failed to start test server")
}

/// A date that is bookable for as long as the test runs.
fn bookable_date() -> NaiveDate {
    *booking_window(local_today())
        .expect("local date is representable")
        .last()
        .expect("window is never empty")
}

fn ana() -> Value {
    json!({
        "name": "Ana",
        "lastName": "Gomez",
        "phone": "+5491122334455",
        "confirmed": true,
    })
}

async fn select(server: &TestServer, date: NaiveDate, time: &str) -> axum_test::TestResponse {
    server
        .post("/api/selection")
        .json(&json!({ "date": date, "time": time }))
        .await
}

#[tokio::test]
async fn test_health() {
    let response = server().get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "status": "ok", "appointments": 0 }));
}

#[tokio::test]
async fn test_time_slots() {
    let response = server().get("/api/time-slots").await;

    response.assert_status_ok();
    let slots = response.json::<Value>();
    assert_eq!(slots.as_array().map(Vec::len), Some(4));
    assert_eq!(slots[2], json!({ "time": "16:00", "label": "4:00 PM" }));
}

#[tokio::test]
async fn test_calendar_for_fixed_today() {
    let response = server()
        .get("/api/calendar")
        .add_query_param("today", "2024-06-05")
        .await;

    response.assert_status_ok();
    let calendar = response.json::<CalendarResponse>();
    assert_eq!(calendar.days.len(), 21);
    assert_eq!(calendar.days[0].date.to_string(), "2024-06-03");
    assert_eq!(calendar.days[0].display_date, "03/06/2024");
    assert_eq!(calendar.days[20].date.to_string(), "2024-07-01");
    assert!(
        calendar
            .days
            .iter()
            .all(|day| day.slots.len() == 4 && day.slots.iter().all(|slot| slot.available))
    );
}

#[tokio::test]
async fn test_calendar_defaults_to_local_today() {
    let response = server().get("/api/calendar").await;

    response.assert_status_ok();
    assert_eq!(response.json::<CalendarResponse>().today, local_today());
}

#[tokio::test]
async fn test_full_booking_flow() {
    let server = server();
    let date = bookable_date();

    let response = select(&server, date, "10:00").await;
    response.assert_status_ok();
    let selection = response.json::<Value>();
    assert_eq!(selection["state"], json!("slotSelected"));
    assert_eq!(selection["time"], json!("10:00"));

    let response = server.post("/api/bookings").json(&ana()).await;
    response.assert_status(StatusCode::CREATED);
    let confirmation = response.json::<BookingConfirmation>();
    assert_eq!(confirmation.appointment.date, date);
    assert_eq!(confirmation.appointment.time, "10:00");
    assert_eq!(confirmation.appointment.last_name, "Gomez");
    assert!(
        confirmation
            .whatsapp_url
            .starts_with("https://wa.me/+543812018090?text=")
    );

    let selection = server.get("/api/selection").await.json::<Value>();
    assert_eq!(selection, json!({ "state": "idle", "displayDate": null }));

    let appointments = server.get("/api/appointments").await.json::<Vec<Appointment>>();
    assert_eq!(appointments, vec![confirmation.appointment]);

    let availability = server
        .get("/api/availability")
        .add_query_param("date", date)
        .add_query_param("time", "10:00")
        .await
        .json::<AvailabilityResponse>();
    assert!(!availability.available);
}

#[tokio::test]
async fn test_booked_slot_cannot_be_selected_again() {
    let server = server();
    let date = bookable_date();

    select(&server, date, "12:00").await.assert_status_ok();
    server
        .post("/api/bookings")
        .json(&ana())
        .await
        .assert_status(StatusCode::CREATED);

    let response = select(&server, date, "12:00").await;
    response.assert_status(StatusCode::CONFLICT);
    assert!(
        response.json::<Value>()["error"]
            .as_str()
            .unwrap()
            .starts_with("Slot already taken")
    );
}

#[tokio::test]
async fn test_cancel_returns_to_idle_without_booking() {
    let server = server();

    select(&server, bookable_date(), "18:00").await.assert_status_ok();

    let response = server.delete("/api/selection").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["state"], json!("idle"));

    let appointments = server.get("/api/appointments").await.json::<Vec<Appointment>>();
    assert!(appointments.is_empty());
}

#[tokio::test]
async fn test_submit_without_selection_conflicts() {
    let response = server().post("/api/bookings").json(&ana()).await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>(), json!({ "error": "No slot selected" }));
}

#[tokio::test]
async fn test_unconfirmed_submission_is_rejected() {
    let server = server();
    select(&server, bookable_date(), "16:00").await.assert_status_ok();

    let mut details = ana();
    details["confirmed"] = json!(false);
    server
        .post("/api/bookings")
        .json(&details)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let selection = server.get("/api/selection").await.json::<Value>();
    assert_eq!(selection["state"], json!("slotSelected"));
}

#[tokio::test]
async fn test_unknown_time_is_rejected() {
    let server = server();

    select(&server, bookable_date(), "11:30")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .get("/api/availability")
        .add_query_param("date", bookable_date())
        .add_query_param("time", "11:30")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[rstest::rstest]
#[case("+262142-12-31")]
#[case("262142-12-31")]
#[tokio::test]
async fn test_calendar_rejects_extreme_today(#[case] today: &str) {
    let server = server();

    let response = server.get("/api/calendar").add_query_param("today", today).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // The session lock must still be usable afterwards.
    server.get("/health").await.assert_status_ok();
}

#[tokio::test]
async fn test_selection_follows_calendar_anchor() {
    let server = server();
    let monday = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();

    let calendar = server
        .get("/api/calendar")
        .add_query_param("today", "2024-06-05")
        .await
        .json::<CalendarResponse>();
    assert_eq!(calendar.days[0].date, monday);

    let response = server
        .post("/api/selection")
        .json(&json!({ "date": monday, "time": "10:00", "today": "2024-06-05" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["date"], json!("2024-06-03"));

    server
        .post("/api/selection")
        .json(&json!({ "date": monday, "time": "12:00", "today": "2024-07-10" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
