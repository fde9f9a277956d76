//! # Working Hours Configuration
//!
//! Defines the window of the day that can be booked and the length of each
//! slot. A configuration is validated once, when it is built, and treated as
//! immutable afterwards; slot generation relies on that.

use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

/// Bookable window of a day, split into equal slots.
///
/// # Invariants
///
/// - `start_hour < end_hour <= 24`
/// - `slot_duration_minutes > 0`
/// - `slot_duration_minutes` divides the window length in minutes
///
/// # Example
///
/// ```
/// use slotbook_core::config::WorkingHoursConfig;
///
/// let config = WorkingHoursConfig::new(9, 17, 30).unwrap();
/// assert_eq!(config.slot_count(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHoursConfig {
    /// First bookable hour (inclusive), 0-23
    pub start_hour: u32,

    /// Closing hour (exclusive), 1-24
    pub end_hour: u32,

    /// Length of a single slot in minutes
    pub slot_duration_minutes: u32,
}

impl Default for WorkingHoursConfig {
    fn default() -> Self {
        Self {
            start_hour: 9, // 9 AM
            end_hour: 17,  // 5 PM
            slot_duration_minutes: 30,
        }
    }
}

impl WorkingHoursConfig {
    /// Builds a configuration and validates it.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::Config` when any invariant is violated.
    pub fn new(start_hour: u32, end_hour: u32, slot_duration_minutes: u32) -> BookingResult<Self> {
        let config = Self {
            start_hour,
            end_hour,
            slot_duration_minutes,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants of a configuration built by hand or deserialized.
    pub fn validate(&self) -> BookingResult<()> {
        if self.end_hour > 24 {
            return Err(BookingError::Config(format!(
                "end hour {} is past midnight",
                self.end_hour
            )));
        }
        if self.start_hour >= self.end_hour {
            return Err(BookingError::Config(format!(
                "start hour {} must be before end hour {}",
                self.start_hour, self.end_hour
            )));
        }
        if self.slot_duration_minutes == 0 {
            return Err(BookingError::Config(
                "slot duration must be greater than zero".to_string(),
            ));
        }
        if self.window_minutes() % self.slot_duration_minutes != 0 {
            return Err(BookingError::Config(format!(
                "slot duration of {} minutes does not evenly divide {} working minutes",
                self.slot_duration_minutes,
                self.window_minutes()
            )));
        }
        Ok(())
    }

    /// Minute of day at which the first slot starts.
    pub fn start_minute(&self) -> u32 {
        self.start_hour * 60
    }

    /// Minute of day at which the last slot ends.
    pub fn end_minute(&self) -> u32 {
        self.end_hour * 60
    }

    pub fn window_minutes(&self) -> u32 {
        self.end_minute().saturating_sub(self.start_minute())
    }

    /// Number of slots in the catalog generated from this configuration.
    pub fn slot_count(&self) -> usize {
        (self.window_minutes() / self.slot_duration_minutes.max(1)) as usize
    }
}
