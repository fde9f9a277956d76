use axum::{Json, extract::State};
use slotbook_core::{models::booking::CatalogResponse, slots::working_hours_label};
use std::sync::Arc;

use crate::ApiState;

/// Lists every slot of the active working-hours configuration.
///
/// # Endpoint
///
/// ```text
/// GET /api/slots
/// ```
pub async fn list_slots(State(state): State<Arc<ApiState>>) -> Json<CatalogResponse> {
    let ledger = state.ledger.lock().await;
    let catalog = ledger.catalog();

    Json(CatalogResponse {
        working_hours: *catalog.config(),
        working_hours_label: working_hours_label(catalog.config()),
        slots: catalog.slots().to_vec(),
    })
}
