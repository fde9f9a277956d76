use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::WorkingHoursConfig;

use super::time_slot::TimeSlot;

/// Entry point a booking came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingSource {
    /// A click on a rendered slot
    User,
    /// Free-text time entry by an administrator
    Admin,
}

/// Successful outcome of a booking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub slot: TimeSlot,
    pub source: BookingSource,
}

impl BookingConfirmation {
    /// Confirmation text shown to whoever made the booking.
    pub fn message(&self) -> String {
        match self.source {
            BookingSource::User => format!("Appointment booked for {}!", self.slot.display_label),
            BookingSource::Admin => format!("Admin: Pre-booked slot for {}", self.slot.display_label),
        }
    }
}

/// A catalog slot together with its state on the selected day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotStatus {
    pub id: String,
    pub display_label: String,
    pub booked: bool,
}

/// Read-only view of a day's ledger, enough to render the booking grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub day: NaiveDate,
    pub working_hours: WorkingHoursConfig,
    pub working_hours_label: String,
    pub slots: Vec<SlotStatus>,
    /// Booked slots in catalog order
    pub booked: Vec<TimeSlot>,
    pub booked_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub working_hours: WorkingHoursConfig,
    pub working_hours_label: String,
    pub slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSlotRequest {
    pub slot_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminBookRequest {
    /// 24-hour time typed by the administrator, "H:MM" or "HH:MM"
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub day: NaiveDate,
    pub slot: TimeSlot,
    pub source: BookingSource,
    pub message: String,
    pub booked_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectDayRequest {
    pub date: NaiveDate,
    /// Replaces the working hours along with the day when present
    #[serde(default)]
    pub working_hours: Option<WorkingHoursConfig>,
}
