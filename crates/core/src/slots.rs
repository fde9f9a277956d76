//! # Slot Generation
//!
//! Turns a working-hours configuration into the ordered grid of bookable
//! slots. Generation is a pure function of the configuration: the same input
//! always produces the same catalog.

use crate::{
    config::WorkingHoursConfig,
    errors::BookingResult,
    models::time_slot::{SlotCatalog, TimeSlot},
};

/// Generates every slot between the start and end of working hours.
///
/// Slots start at `start_hour:00` and advance by `slot_duration_minutes`
/// until (but not including) `end_hour:00`.
///
/// # Errors
///
/// Returns `BookingError::Config` if the configuration is invalid.
///
/// # Example
///
/// ```
/// use slotbook_core::{config::WorkingHoursConfig, slots::generate_slots};
///
/// let catalog = generate_slots(&WorkingHoursConfig::default()).unwrap();
/// assert_eq!(catalog.first().unwrap().id, "09:00");
/// assert_eq!(catalog.last().unwrap().display_label, "4:30 PM");
/// ```
pub fn generate_slots(config: &WorkingHoursConfig) -> BookingResult<SlotCatalog> {
    config.validate()?;

    let slots = (config.start_minute()..config.end_minute())
        .step_by(config.slot_duration_minutes as usize)
        .map(|minute_of_day| {
            let hours = minute_of_day / 60;
            let minutes = minute_of_day % 60;
            TimeSlot {
                id: slot_id(hours, minutes),
                display_label: format_12_hour(hours, minutes),
            }
        })
        .collect();

    Ok(SlotCatalog::from_parts(*config, slots))
}

/// Canonical slot id: zero-padded 24-hour `HH:MM`.
pub fn slot_id(hours: u32, minutes: u32) -> String {
    format!("{:02}:{:02}", hours, minutes)
}

/// Formats a time of day on the 12-hour clock, e.g. `13, 5` -> "1:05 PM".
///
/// Hour 24 is treated as midnight.
pub fn format_12_hour(hours: u32, minutes: u32) -> String {
    let hours = hours % 24;
    let period = if hours < 12 { "AM" } else { "PM" };
    let display_hours = match hours {
        0 => 12,
        1..=12 => hours,
        _ => hours - 12,
    };
    format!("{}:{:02} {}", display_hours, minutes, period)
}

/// Human-readable summary of the bookable window.
pub fn working_hours_label(config: &WorkingHoursConfig) -> String {
    format!(
        "Available from {} to {}",
        format_12_hour(config.start_hour, 0),
        format_12_hour(config.end_hour, 0)
    )
}
