// ============================================================================
// Everest Data - Ledger Store
// File: crates/everest-data/src/store.rs
// Description: Orchestrates loading and storing the full ledger state
// ============================================================================

use std::fs;
use std::path::PathBuf;

use everest_core::BookingLedger;
use everest_shared::config::DataSettings;
use tracing::{error, info};

use crate::error::DataError;
use crate::flatfile::{booking_store, customer_store, flight_store};

/// Loads and stores the entire ledger across the three record streams.
///
/// Load order matters: flights and customers must be present before the
/// booking stream is reconciled against them.
pub struct LedgerStore {
    flights_path: PathBuf,
    customers_path: PathBuf,
    bookings_path: PathBuf,
}

impl LedgerStore {
    pub fn new(settings: &DataSettings) -> Self {
        Self {
            flights_path: settings.flights_path(),
            customers_path: settings.customers_path(),
            bookings_path: settings.bookings_path(),
        }
    }

    pub fn with_paths(flights: PathBuf, customers: PathBuf, bookings: PathBuf) -> Self {
        Self {
            flights_path: flights,
            customers_path: customers,
            bookings_path: bookings,
        }
    }

    /// Load the full ledger. A load failure in one stream is logged and
    /// the remaining streams still load, so one corrupt file does not
    /// take the whole system down.
    pub fn load(&self) -> BookingLedger {
        let mut ledger = BookingLedger::new();

        if let Err(e) = flight_store::load(&self.flights_path, &mut ledger) {
            error!("Failed to load flights: {}", e);
        }
        if let Err(e) = customer_store::load(&self.customers_path, &mut ledger) {
            error!("Failed to load customers: {}", e);
        }
        if let Err(e) = booking_store::load(&self.bookings_path, &mut ledger) {
            error!("Failed to load bookings: {}", e);
        }

        info!(
            "Ledger loaded: {} flight(s), {} customer(s), {} booking(s)",
            ledger.all_flights().len(),
            ledger.all_customers().len(),
            ledger.all_bookings().len()
        );
        ledger
    }

    /// Serialize the full ledger state, soft-deleted and cancelled records
    /// included, so they survive reload.
    pub fn store(&self, ledger: &BookingLedger) -> Result<(), DataError> {
        for path in [&self.flights_path, &self.customers_path, &self.bookings_path] {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
        }
        flight_store::store(&self.flights_path, ledger)?;
        customer_store::store(&self.customers_path, ledger)?;
        booking_store::store(&self.bookings_path, ledger)?;
        info!("Ledger stored");
        Ok(())
    }
}
