use axum::{Json, Router, extract::State, routing::get};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

use crate::ApiState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    day: NaiveDate,
    booked_count: usize,
}

#[derive(Serialize)]
struct VersionResponse {
    version: &'static str,
}

async fn health_check(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    let ledger = state.ledger.lock().await;
    Json(HealthResponse {
        status: "ok",
        day: ledger.day(),
        booked_count: ledger.booked_count(),
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
}
