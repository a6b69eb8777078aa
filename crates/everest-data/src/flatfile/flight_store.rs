// ============================================================================
// Everest Data - Flight Store
// File: crates/everest-data/src/flatfile/flight_store.rs
// ============================================================================
//! Flight record stream:
//! `id::flightNumber::origin::destination::departureDate::basePrice::capacity::deleted::`
//!
//! Trailing basePrice, capacity, and deleted may be absent and default to
//! 100.0, 150, and false.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use everest_core::{BookingLedger, Flight, RecordStatus};
use everest_shared::constants::{DEFAULT_BASE_PRICE, DEFAULT_CAPACITY, RECORD_SEPARATOR};
use everest_shared::EntityId;

use super::{parse_field, required};
use crate::error::DataError;

pub fn load(path: &Path, ledger: &mut BookingLedger) -> Result<(), DataError> {
    for (line_no, line) in super::read_lines(path)? {
        let fields: Vec<&str> = line.split(RECORD_SEPARATOR).collect();

        let id: EntityId = parse_field(
            required(&fields, 0, path, line_no, "id")?,
            path,
            line_no,
            "id",
        )?;
        let flight_number = required(&fields, 1, path, line_no, "flight number")?.to_string();
        let origin = required(&fields, 2, path, line_no, "origin")?.to_string();
        let destination = required(&fields, 3, path, line_no, "destination")?.to_string();
        let departure_date: NaiveDate = parse_field(
            required(&fields, 4, path, line_no, "departure date")?,
            path,
            line_no,
            "departure date",
        )?;
        let base_price: f64 = match super::field(&fields, 5) {
            Some(raw) => parse_field(raw, path, line_no, "base price")?,
            None => DEFAULT_BASE_PRICE,
        };
        let capacity: u32 = match super::field(&fields, 6) {
            Some(raw) => parse_field(raw, path, line_no, "capacity")?,
            None => DEFAULT_CAPACITY,
        };
        let deleted: bool = match super::field(&fields, 7) {
            Some(raw) => parse_field(raw, path, line_no, "deleted flag")?,
            None => false,
        };

        // Stored records bypass constructor validation: reconciliation
        // must accept what the file contains, repairs happen at the
        // reference level.
        let flight = Flight {
            id,
            flight_number,
            origin,
            destination,
            departure_date,
            base_price,
            capacity,
            status: RecordStatus::from_deleted_flag(deleted),
        };
        ledger.insert_flight(flight)?;
    }
    Ok(())
}

pub fn store(path: &Path, ledger: &BookingLedger) -> Result<(), DataError> {
    let mut out = Vec::new();
    for flight in ledger.all_flights() {
        writeln!(
            out,
            "{id}{s}{number}{s}{origin}{s}{dest}{s}{date}{s}{price}{s}{capacity}{s}{deleted}{s}",
            id = flight.id,
            number = flight.flight_number,
            origin = flight.origin,
            dest = flight.destination,
            date = flight.departure_date,
            price = flight.base_price,
            capacity = flight.capacity,
            deleted = flight.is_deleted(),
            s = RECORD_SEPARATOR,
        )?;
    }
    fs::write(path, out)?;
    Ok(())
}
