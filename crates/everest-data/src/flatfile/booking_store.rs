// ============================================================================
// Everest Data - Booking Store
// File: crates/everest-data/src/flatfile/booking_store.rs
// ============================================================================
//! Booking record stream:
//! `id::customerId::flightId::bookingDate::fee::cancelled::`
//!
//! The trailing cancelled field extends the historic 5-field row so that
//! cancelled bookings survive a save/reload cycle; when absent it defaults
//! to false.
//!
//! Reconciliation: a booking whose customer id does not resolve is dropped
//! (logged, not fatal). A booking whose flight id does not resolve is kept
//! for history but immediately cancelled; queries resolve the missing
//! flight to a synthetic placeholder.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use everest_core::{Booking, BookingLedger};
use everest_shared::constants::RECORD_SEPARATOR;
use everest_shared::EntityId;
use tracing::warn;

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
        let customer_id: EntityId = parse_field(
            required(&fields, 1, path, line_no, "customer id")?,
            path,
            line_no,
            "customer id",
        )?;
        let flight_id: EntityId = parse_field(
            required(&fields, 2, path, line_no, "flight id")?,
            path,
            line_no,
            "flight id",
        )?;
        let booking_date: NaiveDate = parse_field(
            required(&fields, 3, path, line_no, "booking date")?,
            path,
            line_no,
            "booking date",
        )?;
        let fee: f64 = parse_field(
            required(&fields, 4, path, line_no, "fee")?,
            path,
            line_no,
            "fee",
        )?;
        let cancelled: bool = match super::field(&fields, 5) {
            Some(raw) => parse_field(raw, path, line_no, "cancelled flag")?,
            None => false,
        };

        if ledger.customer_by_id(customer_id).is_err() {
            warn!(
                "Booking on line {} dropped: customer {} not found",
                line_no, customer_id
            );
            continue;
        }

        let mut booking = Booking::new(id, customer_id, flight_id, booking_date, fee);
        if cancelled {
            booking.cancel();
        }
        if ledger.flight_by_id(flight_id).is_err() {
            warn!(
                "Booking on line {} cancelled: flight {} not found",
                line_no, flight_id
            );
            booking.cancel();
        }
        ledger.insert_booking(booking)?;
    }
    Ok(())
}

pub fn store(path: &Path, ledger: &BookingLedger) -> Result<(), DataError> {
    let mut out = Vec::new();
    for booking in ledger.all_bookings() {
        writeln!(
            out,
            "{id}{s}{customer}{s}{flight}{s}{date}{s}{fee}{s}{cancelled}{s}",
            id = booking.id,
            customer = booking.customer_id,
            flight = booking.flight_id,
            date = booking.booking_date,
            fee = booking.fee,
            cancelled = booking.is_cancelled(),
            s = RECORD_SEPARATOR,
        )?;
    }
    fs::write(path, out)?;
    Ok(())
}
