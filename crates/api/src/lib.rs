//! # Slotbook API
//!
//! The API crate exposes the booking ledger of the selected day over HTTP.
//! It is the boundary a booking screen talks to: it renders the slot grid from
//! `GET /api/day`, books on click through `POST /api/bookings` and switches days
//! with `PUT /api/day`.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into ledger operations
//! - **Middleware**: Error to response mapping
//! - **Config**: Environment and application configuration
//!
//! The ledger lives behind a single async mutex, so "check not booked, then
//! insert" runs as one critical section even with many concurrent clients.

/// Configuration module for API settings
pub mod config;
/// Request handlers that drive the booking ledger
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{Router, http::HeaderValue};
use chrono::NaiveDate;
use eyre::Result;
use slotbook_core::{config::WorkingHoursConfig, errors::BookingResult, ledger::BookingLedger};
use tokio::{net::TcpListener, sync::Mutex};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Ledger of the currently selected day
    pub ledger: Mutex<BookingLedger>,
}

impl ApiState {
    /// Builds state with an empty ledger for `day`.
    pub fn new(day: NaiveDate, working_hours: &WorkingHoursConfig) -> BookingResult<Self> {
        Ok(Self {
            ledger: Mutex::new(BookingLedger::with_config(day, working_hours)?),
        })
    }
}

/// Builds the application router with all routes attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Slot catalog
        .merge(routes::slots::routes())
        // Selected day and its ledger
        .merge(routes::day::routes())
        // User bookings
        .merge(routes::bookings::routes())
        // Admin pre-bookings
        .merge(routes::admin::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration
///
/// This function initializes logging, creates the ledger for the configured
/// day, configures routes and starts the HTTP server.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// let config = slotbook_api::config::ApiConfig::from_env()?;
/// slotbook_api::start_server(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(config.initial_day, &config.working_hours)?);
    info!(
        day = %config.initial_day,
        start_hour = config.working_hours.start_hour,
        end_hour = config.working_hours.end_hour,
        slot_duration_minutes = config.working_hours.slot_duration_minutes,
        "Booking ledger ready"
    );

    let app = app(state).layer(TraceLayer::new_for_http());

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
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
    let app = app.layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
