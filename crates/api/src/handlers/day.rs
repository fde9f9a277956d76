//! # Day Handlers
//!
//! Reading and switching the selected day. Switching always discards the
//! bookings of the previous day.

use axum::{Json, extract::State};
use slotbook_core::models::booking::{LedgerSnapshot, SelectDayRequest};
use std::sync::Arc;
use tracing::info;

use crate::{ApiState, middleware::error_handling::AppError};

/// Returns the selected day with every slot's booked state.
///
/// # Endpoint
///
/// ```text
/// GET /api/day
/// ```
pub async fn get_day(State(state): State<Arc<ApiState>>) -> Json<LedgerSnapshot> {
    let ledger = state.ledger.lock().await;
    Json(ledger.snapshot())
}

/// Selects a new day, optionally with new working hours.
///
/// # Endpoint
///
/// ```text
/// PUT /api/day
/// { "date": "2025-06-01", "working_hours": { "start_hour": 8, "end_hour": 12, "slot_duration_minutes": 30 } }
/// ```
///
/// # Errors
///
/// Responds 400 when the supplied working hours are invalid; the current day
/// and its bookings are kept in that case.
#[axum::debug_handler]
pub async fn select_day(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<SelectDayRequest>,
) -> Result<Json<LedgerSnapshot>, AppError> {
    let mut ledger = state.ledger.lock().await;

    match &payload.working_hours {
        Some(config) => ledger.reset_with_config(payload.date, config)?,
        None => ledger.reset_for_day(payload.date),
    }
    info!(day = %payload.date, "Selected day changed");

    Ok(Json(ledger.snapshot()))
}
