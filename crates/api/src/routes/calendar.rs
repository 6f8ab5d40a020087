use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/time-slots", get(handlers::calendar::list_time_slots))
        .route("/api/calendar", get(handlers::calendar::get_calendar))
        .route(
            "/api/availability",
            get(handlers::calendar::check_availability),
        )
}
