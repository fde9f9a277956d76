use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Invalid working hours: {0}")]
    Config(String),

    #[error("Please enter a valid time in HH:MM format (e.g., 14:00)")]
    MalformedTime(String),

    #[error(
        "Time must be within working hours ({start_hour}:00-{end_hour}:00) and align with {slot_duration_minutes}-minute slots"
    )]
    OutOfRange {
        time: String,
        start_hour: u32,
        end_hour: u32,
        slot_duration_minutes: u32,
    },

    #[error("Slot {0} is not recognized for the selected day")]
    UnknownSlot(String),

    #[error("This slot ({display_label}) is already booked.")]
    AlreadyBooked {
        slot_id: String,
        display_label: String,
    },
}

impl BookingError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            BookingError::Config(_) => "config",
            BookingError::MalformedTime(_) => "malformed_time",
            BookingError::OutOfRange { .. } => "out_of_range",
            BookingError::UnknownSlot(_) => "unknown_slot",
            BookingError::AlreadyBooked { .. } => "already_booked",
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
