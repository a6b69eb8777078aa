// ============================================================================
// Everest Data - Customer Store
// File: crates/everest-data/src/flatfile/customer_store.rs
// ============================================================================
//! Customer record stream:
//! `id::name::phone::email::password::deleted::`
//!
//! A missing password defaults to the fixed placeholder; a missing deleted
//! flag defaults to false.

use std::fs;
use std::io::Write;
use std::path::Path;

use everest_core::{BookingLedger, Customer, RecordStatus};
use everest_shared::constants::{DEFAULT_PASSWORD, RECORD_SEPARATOR};
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
        let name = required(&fields, 1, path, line_no, "name")?.to_string();
        let phone = required(&fields, 2, path, line_no, "phone")?.to_string();
        let email = required(&fields, 3, path, line_no, "email")?.to_string();
        let password = super::field(&fields, 4)
            .unwrap_or(DEFAULT_PASSWORD)
            .to_string();
        let deleted: bool = match super::field(&fields, 5) {
            Some(raw) => parse_field(raw, path, line_no, "deleted flag")?,
            None => false,
        };

        let customer = Customer {
            id,
            name,
            phone,
            email,
            password,
            status: RecordStatus::from_deleted_flag(deleted),
        };
        ledger.insert_customer(customer)?;
    }
    Ok(())
}

pub fn store(path: &Path, ledger: &BookingLedger) -> Result<(), DataError> {
    let mut out = Vec::new();
    for customer in ledger.all_customers() {
        writeln!(
            out,
            "{id}{s}{name}{s}{phone}{s}{email}{s}{password}{s}{deleted}{s}",
            id = customer.id,
            name = customer.name,
            phone = customer.phone,
            email = customer.email,
            password = customer.password,
            deleted = customer.is_deleted(),
            s = RECORD_SEPARATOR,
        )?;
    }
    fs::write(path, out)?;
    Ok(())
}
