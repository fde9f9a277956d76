use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use slotbook_core::{
    config::WorkingHoursConfig,
    errors::BookingError,
    ledger::{BookingLedger, is_valid_slot_id},
    models::booking::BookingSource,
    slots::generate_slots,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

#[fixture]
fn ledger() -> BookingLedger {
    BookingLedger::with_config(day(10), &WorkingHoursConfig::default()).unwrap()
}

#[rstest]
fn test_new_ledger_is_empty(ledger: BookingLedger) {
    assert_eq!(ledger.day(), day(10));
    assert_eq!(ledger.booked_count(), 0);
    assert_eq!(ledger.available_slots().len(), 16);
    assert!(ledger.slot_statuses().iter().all(|slot| !slot.booked));
}

#[rstest]
fn test_request_booking_success(mut ledger: BookingLedger) {
    let confirmation = ledger.request_booking("10:30").unwrap();

    assert_eq!(confirmation.slot.id, "10:30");
    assert_eq!(confirmation.slot.display_label, "10:30 AM");
    assert_eq!(confirmation.source, BookingSource::User);
    assert_eq!(confirmation.message(), "Appointment booked for 10:30 AM!");
    assert!(ledger.is_booked("10:30"));
    assert_eq!(ledger.booked_count(), 1);
}

#[rstest]
fn test_request_booking_twice_fails_but_state_is_stable(mut ledger: BookingLedger) {
    for slot in generate_slots(&WorkingHoursConfig::default()).unwrap().iter() {
        ledger.request_booking(&slot.id).unwrap();
        let before = ledger.booked_slot_ids().clone();

        let err = ledger.request_booking(&slot.id).unwrap_err();

        assert_eq!(
            err,
            BookingError::AlreadyBooked {
                slot_id: slot.id.clone(),
                display_label: slot.display_label.clone(),
            }
        );
        assert_eq!(ledger.booked_slot_ids(), &before);
        assert_eq!(
            ledger.booked_slot_ids().iter().filter(|id| **id == slot.id).count(),
            1
        );
    }
    assert_eq!(ledger.booked_count(), 16);
    assert!(ledger.available_slots().is_empty());
}

#[rstest]
#[case("08:30")]
#[case("17:00")]
#[case("09:15")]
#[case("9:00")]
#[case("")]
#[case("garbage")]
fn test_request_booking_unknown_slot(mut ledger: BookingLedger, #[case] slot_id: &str) {
    let err = ledger.request_booking(slot_id).unwrap_err();

    assert_eq!(err, BookingError::UnknownSlot(slot_id.to_string()));
    assert_eq!(ledger.booked_count(), 0);
}

#[rstest]
fn test_admin_booking_success(mut ledger: BookingLedger) {
    let confirmation = ledger.request_admin_booking("14:00").unwrap();

    assert_eq!(confirmation.slot.id, "14:00");
    assert_eq!(confirmation.slot.display_label, "2:00 PM");
    assert_eq!(confirmation.source, BookingSource::Admin);
    assert_eq!(confirmation.message(), "Admin: Pre-booked slot for 2:00 PM");
}

#[rstest]
fn test_admin_booking_normalizes_single_digit_hour(mut ledger: BookingLedger) {
    let confirmation = ledger.request_admin_booking("9:00").unwrap();

    assert_eq!(confirmation.slot.id, "09:00");
    assert!(ledger.is_booked("09:00"));
}

#[rstest]
fn test_admin_booking_rejects_misalignment(mut ledger: BookingLedger) {
    let err = ledger.request_admin_booking("09:15").unwrap_err();
    assert!(matches!(err, BookingError::OutOfRange { .. }));
    assert_eq!(ledger.booked_count(), 0);

    assert!(ledger.request_admin_booking("09:00").is_ok());
}

#[rstest]
#[case("17:00")]
#[case("08:30")]
#[case("23:30")]
#[case("0:00")]
fn test_admin_booking_rejects_out_of_hours(mut ledger: BookingLedger, #[case] time: &str) {
    let err = ledger.request_admin_booking(time).unwrap_err();

    assert_eq!(
        err,
        BookingError::OutOfRange {
            time: time.to_string(),
            start_hour: 9,
            end_hour: 17,
            slot_duration_minutes: 30,
        }
    );
    assert_eq!(ledger.booked_count(), 0);
}

#[rstest]
#[case("25:00")]
#[case("abc")]
#[case("")]
#[case("9:5")]
#[case("09:60")]
#[case("009:00")]
#[case(" 09:00")]
#[case("09:00 ")]
#[case("0900")]
fn test_admin_booking_rejects_malformed_input(mut ledger: BookingLedger, #[case] time: &str) {
    ledger.request_booking("10:00").unwrap();
    let before = ledger.booked_slot_ids().clone();

    let err = ledger.request_admin_booking(time).unwrap_err();

    assert_eq!(err, BookingError::MalformedTime(time.to_string()));
    assert_eq!(ledger.booked_slot_ids(), &before);
}

#[rstest]
fn test_admin_booking_respects_slot_duration() {
    let config = WorkingHoursConfig::new(9, 12, 45).unwrap();
    let mut ledger = BookingLedger::with_config(day(10), &config).unwrap();

    let err = ledger.request_admin_booking("10:00").unwrap_err();
    assert!(matches!(err, BookingError::OutOfRange { .. }));

    let err = ledger.request_admin_booking("9:30").unwrap_err();
    assert!(matches!(err, BookingError::OutOfRange { .. }));

    assert_eq!(ledger.request_admin_booking("10:30").unwrap().slot.display_label, "10:30 AM");
    assert_eq!(ledger.request_admin_booking("11:15").unwrap().slot.id, "11:15");
    assert_eq!(ledger.booked_count(), 2);
}

#[rstest]
fn test_cross_path_consistency(mut ledger: BookingLedger) {
    ledger.request_admin_booking("11:00").unwrap();
    let err = ledger.request_booking("11:00").unwrap_err();
    assert!(matches!(err, BookingError::AlreadyBooked { .. }));

    ledger.request_booking("15:30").unwrap();
    let err = ledger.request_admin_booking("15:30").unwrap_err();
    assert_eq!(
        err,
        BookingError::AlreadyBooked {
            slot_id: "15:30".to_string(),
            display_label: "3:30 PM".to_string(),
        }
    );

    assert_eq!(ledger.booked_count(), 2);
}

#[rstest]
fn test_reset_for_day_clears_bookings(mut ledger: BookingLedger) {
    ledger.request_booking("09:00").unwrap();
    ledger.request_admin_booking("13:30").unwrap();
    assert_eq!(ledger.booked_count(), 2);

    ledger.reset_for_day(day(11));

    assert_eq!(ledger.day(), day(11));
    assert_eq!(ledger.booked_count(), 0);
    assert_eq!(ledger.available_slots().len(), 16);
}

#[rstest]
fn test_reset_for_day_on_empty_ledger(mut ledger: BookingLedger) {
    ledger.reset_for_day(day(12));
    ledger.reset_for_day(day(12));

    assert_eq!(ledger.booked_count(), 0);
}

#[rstest]
fn test_reset_with_config_rebinds_catalog(mut ledger: BookingLedger) {
    ledger.request_booking("16:30").unwrap();

    let config = WorkingHoursConfig::new(8, 12, 60).unwrap();
    ledger.reset_with_config(day(11), &config).unwrap();

    assert_eq!(ledger.config(), &config);
    assert_eq!(ledger.catalog().len(), 4);
    assert_eq!(ledger.booked_count(), 0);
    assert!(matches!(
        ledger.request_booking("16:30"),
        Err(BookingError::UnknownSlot(_))
    ));
    assert!(ledger.request_booking("08:00").is_ok());
}

#[rstest]
fn test_reset_with_invalid_config_leaves_ledger_untouched(mut ledger: BookingLedger) {
    ledger.request_booking("12:00").unwrap();

    let invalid = WorkingHoursConfig {
        start_hour: 12,
        end_hour: 10,
        slot_duration_minutes: 30,
    };
    let err = ledger.reset_with_config(day(11), &invalid).unwrap_err();

    assert!(matches!(err, BookingError::Config(_)));
    assert_eq!(ledger.day(), day(10));
    assert!(ledger.is_booked("12:00"));
}

#[rstest]
fn test_booked_slots_follow_catalog_order(mut ledger: BookingLedger) {
    ledger.request_booking("15:00").unwrap();
    ledger.request_admin_booking("9:30").unwrap();
    ledger.request_booking("12:00").unwrap();

    let labels: Vec<String> = ledger
        .booked_slots()
        .into_iter()
        .map(|slot| slot.display_label)
        .collect();
    assert_eq!(labels, vec!["9:30 AM", "12:00 PM", "3:00 PM"]);

    let snapshot = ledger.snapshot();
    assert_eq!(snapshot.booked_count, 3);
    assert_eq!(snapshot.working_hours_label, "Available from 9:00 AM to 5:00 PM");
    assert_eq!(snapshot.slots.iter().filter(|slot| slot.booked).count(), 3);
}

#[test]
fn test_is_valid_slot_id() {
    let catalog = generate_slots(&WorkingHoursConfig::default()).unwrap();

    assert!(is_valid_slot_id(&catalog, "09:00"));
    assert!(is_valid_slot_id(&catalog, "16:30"));
    assert!(!is_valid_slot_id(&catalog, "9:00"));
    assert!(!is_valid_slot_id(&catalog, "17:00"));
    assert!(!is_valid_slot_id(&catalog, "09:15"));
    assert!(!is_valid_slot_id(&catalog, "nine"));
}
