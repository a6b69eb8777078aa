//! Persistence round-trip and reconciliation tests.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use everest_core::BookingLedger;
use everest_data::flatfile::{customer_store, flight_store};
use everest_data::{DataError, LedgerStore};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn store_in(dir: &TempDir) -> LedgerStore {
    LedgerStore::with_paths(
        dir.path().join("flights.txt"),
        dir.path().join("customers.txt"),
        dir.path().join("bookings.txt"),
    )
}

fn seeded_ledger() -> BookingLedger {
    let mut ledger = BookingLedger::new();
    ledger
        .add_flight(
            "EV101".to_string(),
            "Kathmandu".to_string(),
            "London".to_string(),
            date(2026, 12, 24),
            100.0,
            2,
        )
        .unwrap();
    ledger
        .add_flight(
            "EV202".to_string(),
            "Kathmandu".to_string(),
            "Delhi".to_string(),
            date(2026, 12, 28),
            80.0,
            150,
        )
        .unwrap();
    ledger
        .add_customer(
            "Asha Gurung".to_string(),
            "+977-1-5551234".to_string(),
            "asha@example.com".to_string(),
            "secret1".to_string(),
        )
        .unwrap();
    ledger
        .add_customer(
            "Bikram Shah".to_string(),
            "+977-1-5555678".to_string(),
            "bikram@example.com".to_string(),
            "secret2".to_string(),
        )
        .unwrap();
    ledger
}

#[test]
fn full_state_survives_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut ledger = seeded_ledger();
    let kept = ledger.add_booking(1, 1, date(2026, 10, 1)).unwrap().id;
    let dropped = ledger.add_booking(2, 1, date(2026, 10, 2)).unwrap().id;
    ledger.cancel_booking(dropped, 10.0).unwrap();
    ledger.soft_delete_flight(2).unwrap();
    ledger.soft_delete_customer(2).unwrap();

    store.store(&ledger).unwrap();
    let reloaded = store.load();

    assert_eq!(reloaded.all_flights().len(), 2);
    assert_eq!(reloaded.flights().len(), 1);
    assert_eq!(reloaded.flight_by_id(1).unwrap().capacity, 2);
    assert!(reloaded.flight_by_id(2).unwrap().is_deleted());
    assert!(reloaded.customer_by_id(2).unwrap().is_deleted());

    let active: Vec<_> = reloaded.bookings().iter().map(|b| b.id).collect();
    let cancelled: Vec<_> = reloaded.cancelled_bookings().iter().map(|b| b.id).collect();
    assert_eq!(active, vec![kept]);
    assert_eq!(cancelled, vec![dropped]);
}

#[test]
fn missing_files_load_as_empty_ledger() {
    let dir = TempDir::new().unwrap();
    let ledger = store_in(&dir).load();
    assert!(ledger.all_flights().is_empty());
    assert!(ledger.all_customers().is_empty());
    assert!(ledger.all_bookings().is_empty());
}

#[test]
fn flight_row_defaults_apply_for_missing_trailing_fields() {
    let dir = TempDir::new().unwrap();
    let path: PathBuf = dir.path().join("flights.txt");
    fs::write(&path, "1::EV101::Kathmandu::London::2026-12-24::\n").unwrap();

    let mut ledger = BookingLedger::new();
    flight_store::load(&path, &mut ledger).unwrap();

    let flight = ledger.flight_by_id(1).unwrap();
    assert_eq!(flight.base_price, 100.0);
    assert_eq!(flight.capacity, 150);
    assert!(!flight.is_deleted());
}

#[test]
fn customer_row_defaults_password_placeholder() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("customers.txt");
    fs::write(&path, "1::Asha Gurung::+977-1-5551234::asha@example.com::\n").unwrap();

    let mut ledger = BookingLedger::new();
    customer_store::load(&path, &mut ledger).unwrap();

    let customer = ledger.customer_by_id(1).unwrap();
    assert_eq!(customer.password, "default123");
    assert!(!customer.is_deleted());
}

#[test]
fn malformed_numeric_field_reports_line_number() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("flights.txt");
    fs::write(
        &path,
        "1::EV101::Kathmandu::London::2026-12-24::100.0::150::false::\n\
         2::EV102::Kathmandu::Delhi::2026-12-28::not-a-price::150::false::\n",
    )
    .unwrap();

    let mut ledger = BookingLedger::new();
    let err = flight_store::load(&path, &mut ledger).unwrap_err();
    match err {
        DataError::Format { line, .. } => assert_eq!(line, 2),
        other => panic!("expected format error, got {other}"),
    }
}

#[test]
fn booking_with_unknown_customer_is_dropped() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.store(&seeded_ledger()).unwrap();
    fs::write(
        dir.path().join("bookings.txt"),
        "1::99::1::2026-10-01::120.0::\n",
    )
    .unwrap();

    let ledger = store.load();
    assert!(ledger.all_bookings().is_empty());
}

#[test]
fn booking_with_unknown_flight_is_kept_but_cancelled() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.store(&seeded_ledger()).unwrap();
    fs::write(
        dir.path().join("bookings.txt"),
        "1::1::99::2026-10-01::120.0::\n",
    )
    .unwrap();

    let ledger = store.load();
    assert!(ledger.bookings().is_empty());
    let cancelled = ledger.cancelled_bookings();
    assert_eq!(cancelled.len(), 1);
    assert_eq!(cancelled[0].flight_id, 99);
    // history resolves against a synthetic placeholder flight
    assert_eq!(ledger.resolve_flight(99).flight_number, "N/A");
}

#[test]
fn corrupt_booking_file_does_not_block_other_streams() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.store(&seeded_ledger()).unwrap();
    fs::write(dir.path().join("bookings.txt"), "garbage line\n").unwrap();

    let ledger = store.load();
    assert_eq!(ledger.all_flights().len(), 2);
    assert_eq!(ledger.all_customers().len(), 2);
    assert!(ledger.all_bookings().is_empty());
}

#[test]
fn legacy_five_field_booking_row_loads_as_active() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.store(&seeded_ledger()).unwrap();
    fs::write(
        dir.path().join("bookings.txt"),
        "1::1::1::2026-10-01::120.0::\n",
    )
    .unwrap();

    let ledger = store.load();
    let bookings = ledger.bookings();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].fee, 120.0);
}
