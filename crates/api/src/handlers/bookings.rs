use axum::{Json, extract::State};
use slotbook_core::models::booking::{BookSlotRequest, BookingResponse};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

/// Books a slot chosen from the rendered grid.
///
/// # Endpoint
///
/// ```text
/// POST /api/bookings
/// { "slot_id": "09:30" }
/// ```
///
/// Responds 404 for a slot outside the catalog and 409 when it is taken.
#[axum::debug_handler]
pub async fn book_slot(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<BookSlotRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    // Held for the whole check-and-set.
    let mut ledger = state.ledger.lock().await;
    let confirmation = ledger.request_booking(&payload.slot_id)?;

    Ok(Json(BookingResponse {
        day: ledger.day(),
        message: confirmation.message(),
        slot: confirmation.slot,
        source: confirmation.source,
        booked_count: ledger.booked_count(),
    }))
}
