//! # Error Handling Middleware
//!
//! Maps booking errors to HTTP status codes and JSON error bodies so every
//! endpoint reports failures the same way:
//!
//! ```json
//! { "error": "This slot (9:00 AM) is already booked.", "kind": "already_booked" }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use slotbook_core::errors::BookingError;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps `BookingError` and implements `IntoResponse`, so
/// handlers can use `?` on ledger operations directly.
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BookingError::Config(_) => StatusCode::BAD_REQUEST,
            BookingError::MalformedTime(_) => StatusCode::BAD_REQUEST,
            BookingError::OutOfRange { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            BookingError::UnknownSlot(_) => StatusCode::NOT_FOUND,
            BookingError::AlreadyBooked { .. } => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": self.0.to_string(),
            "kind": self.0.kind(),
        }));

        (status, body).into_response()
    }
}

/// Automatic conversion from BookingError to AppError
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Maps a BookingError to an HTTP response
pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}
