use axum::{Json, extract::State};
use slotbook_core::models::booking::{AdminBookRequest, BookingResponse};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

/// Pre-books a slot from a typed 24-hour time.
///
/// # Endpoint
///
/// ```text
/// POST /api/admin/bookings
/// { "time": "14:00" }
/// ```
///
/// Responds 400 for text that is not `H:MM`/`HH:MM`, 422 for a time outside
/// working hours or off the slot grid and 409 when the slot is taken.
#[axum::debug_handler]
pub async fn prebook_slot(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<AdminBookRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let mut ledger = state.ledger.lock().await;
    let confirmation = ledger.request_admin_booking(&payload.time)?;

    Ok(Json(BookingResponse {
        day: ledger.day(),
        message: confirmation.message(),
        slot: confirmation.slot,
        source: confirmation.source,
        booked_count: ledger.booked_count(),
    }))
}
