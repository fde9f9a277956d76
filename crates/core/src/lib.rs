//! # Slotbook Core
//!
//! Appointment slot scheduling for a single selected day.
//!
//! - **config**: working-hours window and slot length
//! - **slots**: generation of the ordered slot catalog
//! - **ledger**: validated booking of slots for the selected day
//! - **models**: serializable values exchanged with callers
//! - **errors**: the error taxonomy shared by all of the above

pub mod config;
pub mod errors;
pub mod ledger;
pub mod models;
pub mod slots;
