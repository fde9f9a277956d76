use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/day",
        get(handlers::day::get_day).put(handlers::day::select_day),
    )
}
