use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/selection",
            get(handlers::booking::get_selection)
                .post(handlers::booking::select_slot)
                .delete(handlers::booking::cancel_selection),
        )
        .route("/api/bookings", post(handlers::booking::submit_booking))
        .route(
            "/api/appointments",
            get(handlers::booking::list_appointments),
        )
}
