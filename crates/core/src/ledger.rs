//! # Booking Ledger
//!
//! Holds the booked slots of the selected day. Every mutation goes through
//! one of the validated entry points:
//!
//! - [`BookingLedger::request_booking`] for a slot picked from the rendered grid
//! - [`BookingLedger::request_admin_booking`] for a time typed in by an administrator
//! - [`BookingLedger::reset_for_day`] / [`BookingLedger::reset_with_config`] when the day changes
//!
//! A failed operation never changes the ledger.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::{
    config::WorkingHoursConfig,
    errors::{BookingError, BookingResult},
    models::{
        booking::{BookingConfirmation, BookingSource, LedgerSnapshot, SlotStatus},
        time_slot::{SlotCatalog, TimeSlot},
    },
    slots::{generate_slots, slot_id, working_hours_label},
};

/// 24-hour `H:MM` or `HH:MM`, accepted on the admin path.
static ADMIN_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([01]?[0-9]|2[0-3]):([0-5][0-9])$").expect("admin time pattern compiles")
});

/// Canonical slot id shape.
static SLOT_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("slot id pattern compiles"));

/// True if `id` is a canonical `HH:MM` id present in `catalog`.
pub fn is_valid_slot_id(catalog: &SlotCatalog, id: &str) -> bool {
    SLOT_ID.is_match(id) && catalog.contains(id)
}

/// Parses admin input into `(hours, minutes)`.
fn parse_admin_time(raw: &str) -> BookingResult<(u32, u32)> {
    let malformed = || BookingError::MalformedTime(raw.to_string());
    let captures = ADMIN_TIME.captures(raw).ok_or_else(malformed)?;
    let hours = captures[1].parse::<u32>().map_err(|_| malformed())?;
    let minutes = captures[2].parse::<u32>().map_err(|_| malformed())?;
    Ok((hours, minutes))
}

/// Bookings for the currently selected day.
#[derive(Debug, Clone)]
pub struct BookingLedger {
    day: NaiveDate,
    catalog: SlotCatalog,
    booked_slot_ids: BTreeSet<String>,
}

impl BookingLedger {
    /// Creates an empty ledger for `day` over the given catalog.
    pub fn new(day: NaiveDate, catalog: SlotCatalog) -> Self {
        Self {
            day,
            catalog,
            booked_slot_ids: BTreeSet::new(),
        }
    }

    /// Generates the catalog for `config` and creates an empty ledger for `day`.
    pub fn with_config(day: NaiveDate, config: &WorkingHoursConfig) -> BookingResult<Self> {
        Ok(Self::new(day, generate_slots(config)?))
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn catalog(&self) -> &SlotCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &WorkingHoursConfig {
        self.catalog.config()
    }

    pub fn booked_slot_ids(&self) -> &BTreeSet<String> {
        &self.booked_slot_ids
    }

    pub fn booked_count(&self) -> usize {
        self.booked_slot_ids.len()
    }

    pub fn is_booked(&self, slot_id: &str) -> bool {
        self.booked_slot_ids.contains(slot_id)
    }

    pub fn is_valid_slot_id(&self, id: &str) -> bool {
        is_valid_slot_id(&self.catalog, id)
    }

    /// Booked slots in catalog order.
    pub fn booked_slots(&self) -> Vec<TimeSlot> {
        self.catalog
            .iter()
            .filter(|slot| self.is_booked(&slot.id))
            .cloned()
            .collect()
    }

    /// Slots that can still be booked, in catalog order.
    pub fn available_slots(&self) -> Vec<TimeSlot> {
        self.catalog
            .iter()
            .filter(|slot| !self.is_booked(&slot.id))
            .cloned()
            .collect()
    }

    /// Every catalog slot with its booked flag.
    pub fn slot_statuses(&self) -> Vec<SlotStatus> {
        self.catalog
            .iter()
            .map(|slot| SlotStatus {
                id: slot.id.clone(),
                display_label: slot.display_label.clone(),
                booked: self.is_booked(&slot.id),
            })
            .collect()
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            day: self.day,
            working_hours: *self.config(),
            working_hours_label: working_hours_label(self.config()),
            slots: self.slot_statuses(),
            booked: self.booked_slots(),
            booked_count: self.booked_count(),
        }
    }

    /// Books a slot picked from the catalog.
    ///
    /// # Errors
    ///
    /// - `BookingError::UnknownSlot` if `slot_id` is not in the catalog
    /// - `BookingError::AlreadyBooked` if the slot is taken
    pub fn request_booking(&mut self, slot_id: &str) -> BookingResult<BookingConfirmation> {
        if !self.is_valid_slot_id(slot_id) {
            return Err(BookingError::UnknownSlot(slot_id.to_string()));
        }
        self.insert(slot_id, BookingSource::User)
    }

    /// Books a slot from free-text admin input.
    ///
    /// Input is checked against the working hours and the slot grid before
    /// the catalog is consulted, so bad input gets a specific error instead
    /// of `UnknownSlot`.
    ///
    /// # Errors
    ///
    /// - `BookingError::MalformedTime` if the text is not `H:MM`/`HH:MM`
    /// - `BookingError::OutOfRange` if the time is outside working hours or off the grid
    /// - `BookingError::AlreadyBooked` if the slot is taken
    pub fn request_admin_booking(&mut self, raw_time_text: &str) -> BookingResult<BookingConfirmation> {
        let (hours, minutes) = parse_admin_time(raw_time_text)?;

        let config = *self.config();
        let out_of_range = || BookingError::OutOfRange {
            time: raw_time_text.to_string(),
            start_hour: config.start_hour,
            end_hour: config.end_hour,
            slot_duration_minutes: config.slot_duration_minutes,
        };

        if hours < config.start_hour || hours >= config.end_hour {
            return Err(out_of_range());
        }

        // Alignment is relative to the start of working hours.
        let offset = hours * 60 + minutes - config.start_minute();
        if offset % config.slot_duration_minutes != 0 {
            return Err(out_of_range());
        }

        self.insert(&slot_id(hours, minutes), BookingSource::Admin)
    }

    /// Starts a fresh, empty ledger for `day`, keeping the catalog.
    pub fn reset_for_day(&mut self, day: NaiveDate) {
        info!(
            previous_day = %self.day,
            day = %day,
            discarded = self.booked_slot_ids.len(),
            "Resetting booking ledger"
        );
        self.day = day;
        self.booked_slot_ids.clear();
    }

    /// Starts a fresh ledger for `day` and rebinds the catalog when the
    /// working hours changed.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::Config` for an invalid configuration; the
    /// ledger is left untouched in that case.
    pub fn reset_with_config(&mut self, day: NaiveDate, config: &WorkingHoursConfig) -> BookingResult<()> {
        if config != self.config() {
            let catalog = generate_slots(config)?;
            info!(
                start_hour = config.start_hour,
                end_hour = config.end_hour,
                slot_duration_minutes = config.slot_duration_minutes,
                slots = catalog.len(),
                "Rebinding slot catalog"
            );
            self.catalog = catalog;
        }
        self.reset_for_day(day);
        Ok(())
    }

    /// Check-and-set on an id already known to be in the catalog.
    fn insert(&mut self, slot_id: &str, source: BookingSource) -> BookingResult<BookingConfirmation> {
        let slot = self
            .catalog
            .get(slot_id)
            .cloned()
            .ok_or_else(|| BookingError::UnknownSlot(slot_id.to_string()))?;

        if !self.booked_slot_ids.insert(slot.id.clone()) {
            debug!(day = %self.day, slot = %slot.id, "Slot already booked");
            return Err(BookingError::AlreadyBooked {
                slot_id: slot.id,
                display_label: slot.display_label,
            });
        }

        debug!(day = %self.day, slot = %slot.id, ?source, "Slot booked");
        Ok(BookingConfirmation { slot, source })
    }
}
