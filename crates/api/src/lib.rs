//! # SlotBook API
//!
//! The API crate provides the web server for the SlotBook booking service.
//! It exposes the four-week slot calendar, the slot selection flow and the
//! booking submission that hands back a WhatsApp confirmation link.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into booking session calls
//! - **Middleware**: Error mapping
//! - **Config**: Environment-driven settings
//!
//! All state lives in memory for the lifetime of the process.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use chrono::{Local, NaiveDate};
use eyre::{Result, WrapErr};
use slotbook_store::{BookingSession, InMemoryAppointmentStore};
use tokio::{net::TcpListener, sync::Mutex};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// Handlers take the lock, run one synchronous session operation and
/// release it, so every request observes a consistent store.
pub struct ApiState {
    pub session: Mutex<BookingSession<InMemoryAppointmentStore>>,
}

impl ApiState {
    /// Fresh state with an empty store.
    pub fn new(business_number: impl Into<String>) -> Self {
        Self {
            session: Mutex::new(BookingSession::new(
                InMemoryAppointmentStore::new(),
                business_number,
            )),
        }
    }
}

/// The server's local calendar date.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Builds the application router with every route and the shared state.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .merge(routes::calendar::routes())
        .merge(routes::booking::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration
///
/// Sets up logging, builds the routes, applies CORS and timeout layers and
/// serves until the listener fails.
pub async fn start_server(config: config::ApiConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(config.business_number.clone()));
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| {
                origin
                    .parse()
                    .wrap_err_with(|| format!("Invalid CORS origin: {}", origin))
            })
            .collect::<Result<Vec<axum::http::HeaderValue>>>()?;

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(axum::error_handling::HandleErrorLayer::new(
                |_: tower::BoxError| async { axum::http::StatusCode::REQUEST_TIMEOUT },
            ))
            .timeout(std::time::Duration::from_secs(config.request_timeout)),
    );

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        business_number = %config.business_number,
        "Server listening on http://{}", addr
    );
    axum::serve(listener, app).await?;

    Ok(())
}
