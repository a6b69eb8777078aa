// ============================================================================
// Everest Core - Booking Ledger
// File: crates/everest-core/src/services/ledger.rs
// Description: In-memory store of flights, customers, and bookings with
//              invariant-enforcing mutation operations
// ============================================================================

use std::collections::BTreeMap;

use chrono::NaiveDate;
use everest_shared::EntityId;
use tracing::{info, warn};

use crate::domain::{Booking, Customer, Flight};
use crate::error::DomainError;
use crate::services::pricing;

/// The booking ledger owns all flight, customer, and booking records and is
/// the only component that mutates them.
///
/// Collections are keyed by identifier. Identifiers are allocated as
/// `max existing id + 1`, so iteration in key order matches insertion
/// order for listing. Flight passenger sets and customer booking lists are
/// derived views recomputed from the booking collection; nothing else
/// holds back-references that could drift out of sync.
///
/// Single-threaded by design: operations run to completion on the calling
/// thread and perform no I/O. Callers must serialize access externally if
/// they introduce threads.
#[derive(Debug, Default)]
pub struct BookingLedger {
    flights: BTreeMap<EntityId, Flight>,
    customers: BTreeMap<EntityId, Customer>,
    bookings: BTreeMap<EntityId, Booking>,
}

fn next_id<T>(map: &BTreeMap<EntityId, T>) -> EntityId {
    map.keys().next_back().copied().unwrap_or(0) + 1
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Flight / customer CRUD
    // ------------------------------------------------------------------

    /// Validate and insert a new flight, allocating the next identifier.
    #[allow(clippy::too_many_arguments)]
    pub fn add_flight(
        &mut self,
        flight_number: String,
        origin: String,
        destination: String,
        departure_date: NaiveDate,
        base_price: f64,
        capacity: u32,
    ) -> Result<&Flight, DomainError> {
        let id = next_id(&self.flights);
        let flight = Flight::new(
            id,
            flight_number,
            origin,
            destination,
            departure_date,
            base_price,
            capacity,
        )?;
        info!("Flight #{} added: {}", id, flight.flight_number);
        self.flights.insert(id, flight);
        Ok(&self.flights[&id])
    }

    /// Validate and insert a new customer, allocating the next identifier.
    pub fn add_customer(
        &mut self,
        name: String,
        phone: String,
        email: String,
        password: String,
    ) -> Result<&Customer, DomainError> {
        let id = next_id(&self.customers);
        let customer = Customer::new(id, name, phone, email, password)?;
        info!("Customer #{} added: {}", id, customer.name);
        self.customers.insert(id, customer);
        Ok(&self.customers[&id])
    }

    /// Overwrite a customer's mutable fields in place.
    pub fn update_customer(
        &mut self,
        id: EntityId,
        name: String,
        phone: String,
        email: String,
        password: String,
    ) -> Result<&Customer, DomainError> {
        let customer = self
            .customers
            .get_mut(&id)
            .ok_or(DomainError::CustomerNotFound(id))?;
        customer.update_details(name, phone, email, password)?;
        info!("Customer #{} updated", id);
        Ok(&self.customers[&id])
    }

    /// Mark a flight unavailable for listing and new bookings without
    /// removing it from storage.
    pub fn soft_delete_flight(&mut self, id: EntityId) -> Result<(), DomainError> {
        let flight = self
            .flights
            .get_mut(&id)
            .ok_or(DomainError::FlightNotFound(id))?;
        flight.soft_delete();
        info!("Flight #{} soft-deleted", id);
        Ok(())
    }

    pub fn soft_delete_customer(&mut self, id: EntityId) -> Result<(), DomainError> {
        let customer = self
            .customers
            .get_mut(&id)
            .ok_or(DomainError::CustomerNotFound(id))?;
        customer.soft_delete();
        info!("Customer #{} soft-deleted", id);
        Ok(())
    }

    /// Permanently remove a flight. Dependent active bookings are cancelled;
    /// their history remains and resolves to a placeholder flight on query.
    pub fn remove_flight(&mut self, id: EntityId) -> Result<Flight, DomainError> {
        let flight = self
            .flights
            .remove(&id)
            .ok_or(DomainError::FlightNotFound(id))?;
        let mut invalidated = 0usize;
        for booking in self
            .bookings
            .values_mut()
            .filter(|b| b.flight_id == id && !b.is_cancelled())
        {
            booking.cancel();
            invalidated += 1;
        }
        if invalidated > 0 {
            warn!(
                "Flight #{} removed; {} active booking(s) cancelled",
                id, invalidated
            );
        } else {
            info!("Flight #{} removed", id);
        }
        Ok(flight)
    }

    /// Permanently remove a customer. Their bookings remain for history and
    /// resolve to a placeholder customer on query.
    pub fn remove_customer(&mut self, id: EntityId) -> Result<Customer, DomainError> {
        let customer = self
            .customers
            .remove(&id)
            .ok_or(DomainError::CustomerNotFound(id))?;
        info!("Customer #{} removed", id);
        Ok(customer)
    }

    // ------------------------------------------------------------------
    // Booking operations
    // ------------------------------------------------------------------

    /// Book a customer onto a flight, computing the fee as of `date`.
    pub fn add_booking(
        &mut self,
        customer_id: EntityId,
        flight_id: EntityId,
        date: NaiveDate,
    ) -> Result<&Booking, DomainError> {
        self.customers
            .get(&customer_id)
            .filter(|c| !c.is_deleted())
            .ok_or(DomainError::CustomerNotFound(customer_id))?;
        let (base_price, departure_date, capacity) = {
            let flight = self
                .flights
                .get(&flight_id)
                .filter(|f| !f.is_deleted())
                .ok_or(DomainError::FlightNotFound(flight_id))?;
            (flight.base_price, flight.departure_date, flight.capacity)
        };

        let active = self.active_booking_count(flight_id);
        if active >= capacity as usize {
            return Err(DomainError::CapacityExceeded(flight_id));
        }
        if self
            .bookings
            .values()
            .any(|b| !b.is_cancelled() && b.customer_id == customer_id && b.flight_id == flight_id)
        {
            return Err(DomainError::DuplicateBooking {
                customer_id,
                flight_id,
            });
        }

        let fee = pricing::quote(base_price, departure_date, date, active, capacity);
        let id = next_id(&self.bookings);
        let booking = Booking::new(id, customer_id, flight_id, date, fee);
        info!(
            "Booking #{} added: customer {} on flight {} for ${:.2}",
            id, customer_id, flight_id, fee
        );
        self.bookings.insert(id, booking);
        Ok(&self.bookings[&id])
    }

    /// Quote the fee a booking would carry without committing anything.
    pub fn preview_fee(&self, flight_id: EntityId, as_of: NaiveDate) -> Result<f64, DomainError> {
        let flight = self
            .flights
            .get(&flight_id)
            .filter(|f| !f.is_deleted())
            .ok_or(DomainError::FlightNotFound(flight_id))?;
        Ok(pricing::quote(
            flight.base_price,
            flight.departure_date,
            as_of,
            self.active_booking_count(flight_id),
            flight.capacity,
        ))
    }

    /// Cancel a booking, charging `cancellation_fee`.
    ///
    /// The fee is supplied by the caller (the shell's policy) and is only
    /// reported, never accumulated into a balance. Cancelling an already
    /// cancelled booking is rejected so callers cannot double-charge.
    pub fn cancel_booking(
        &mut self,
        booking_id: EntityId,
        cancellation_fee: f64,
    ) -> Result<(), DomainError> {
        let booking = self
            .bookings
            .get_mut(&booking_id)
            .ok_or(DomainError::BookingNotFound(booking_id))?;
        if booking.is_cancelled() {
            return Err(DomainError::AlreadyCancelled(booking_id));
        }
        booking.cancel();
        info!(
            "Booking #{} cancelled with cancellation fee ${:.2}",
            booking_id, cancellation_fee
        );
        Ok(())
    }

    /// Rebook onto another flight: cancel the existing booking (standard
    /// cancellation fee) and create a new one for the same customer with
    /// the original booking date.
    ///
    /// Composed from `cancel_booking` and `add_booking` so the booking's
    /// (customer, flight) pair stays immutable. Known gap: if the new
    /// booking fails, the cancellation is not rolled back.
    pub fn update_booking(
        &mut self,
        booking_id: EntityId,
        new_flight_id: EntityId,
    ) -> Result<&Booking, DomainError> {
        let (customer_id, booking_date, old_fee) = {
            let booking = self.booking_by_id(booking_id)?;
            (booking.customer_id, booking.booking_date, booking.fee)
        };
        let cancellation_fee = pricing::cancellation_fee_for(old_fee);
        self.cancel_booking(booking_id, cancellation_fee)?;
        let rebooked = self.add_booking(customer_id, new_flight_id, booking_date)?;
        info!(
            "Booking #{} rebooked as #{} on flight {}",
            booking_id, rebooked.id, new_flight_id
        );
        Ok(rebooked)
    }

    // ------------------------------------------------------------------
    // Loader registration (records that already carry identifiers)
    // ------------------------------------------------------------------

    pub fn insert_flight(&mut self, flight: Flight) -> Result<(), DomainError> {
        if flight.id == 0 {
            return Err(DomainError::Validation("Flight id must be >= 1".into()));
        }
        if self.flights.contains_key(&flight.id) {
            return Err(DomainError::Validation(format!(
                "Duplicate flight id {}",
                flight.id
            )));
        }
        self.flights.insert(flight.id, flight);
        Ok(())
    }

    pub fn insert_customer(&mut self, customer: Customer) -> Result<(), DomainError> {
        if customer.id == 0 {
            return Err(DomainError::Validation("Customer id must be >= 1".into()));
        }
        if self.customers.contains_key(&customer.id) {
            return Err(DomainError::Validation(format!(
                "Duplicate customer id {}",
                customer.id
            )));
        }
        self.customers.insert(customer.id, customer);
        Ok(())
    }

    /// Register a booking loaded from storage, cancelled or not.
    pub fn insert_booking(&mut self, booking: Booking) -> Result<(), DomainError> {
        if booking.id == 0 {
            return Err(DomainError::Validation("Booking id must be >= 1".into()));
        }
        if self.bookings.contains_key(&booking.id) {
            return Err(DomainError::Validation(format!(
                "Duplicate booking id {}",
                booking.id
            )));
        }
        self.bookings.insert(booking.id, booking);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Query surface
    // ------------------------------------------------------------------

    pub fn flight_by_id(&self, id: EntityId) -> Result<&Flight, DomainError> {
        self.flights.get(&id).ok_or(DomainError::FlightNotFound(id))
    }

    pub fn customer_by_id(&self, id: EntityId) -> Result<&Customer, DomainError> {
        self.customers
            .get(&id)
            .ok_or(DomainError::CustomerNotFound(id))
    }

    pub fn booking_by_id(&self, id: EntityId) -> Result<&Booking, DomainError> {
        self.bookings
            .get(&id)
            .ok_or(DomainError::BookingNotFound(id))
    }

    /// Non-deleted flights in insertion order.
    pub fn flights(&self) -> Vec<&Flight> {
        self.flights.values().filter(|f| !f.is_deleted()).collect()
    }

    /// Every flight, soft-deleted ones included.
    pub fn all_flights(&self) -> Vec<&Flight> {
        self.flights.values().collect()
    }

    /// Non-deleted customers in insertion order.
    pub fn customers(&self) -> Vec<&Customer> {
        self.customers
            .values()
            .filter(|c| !c.is_deleted())
            .collect()
    }

    /// Every customer, soft-deleted ones included.
    pub fn all_customers(&self) -> Vec<&Customer> {
        self.customers.values().collect()
    }

    /// Active bookings in creation order.
    pub fn bookings(&self) -> Vec<&Booking> {
        self.bookings
            .values()
            .filter(|b| !b.is_cancelled())
            .collect()
    }

    /// Cancelled bookings in creation order, kept for audit/history.
    pub fn cancelled_bookings(&self) -> Vec<&Booking> {
        self.bookings
            .values()
            .filter(|b| b.is_cancelled())
            .collect()
    }

    /// Every booking regardless of state, in creation order.
    pub fn all_bookings(&self) -> Vec<&Booking> {
        self.bookings.values().collect()
    }

    // ------------------------------------------------------------------
    // Derived views (back-references recomputed from the booking set)
    // ------------------------------------------------------------------

    /// Number of active bookings currently held against a flight.
    pub fn active_booking_count(&self, flight_id: EntityId) -> usize {
        self.bookings
            .values()
            .filter(|b| !b.is_cancelled() && b.flight_id == flight_id)
            .count()
    }

    /// Customers holding an active booking on a flight. Customers whose
    /// records were hard-deleted are resolved to placeholders.
    pub fn passengers_of(&self, flight_id: EntityId) -> Vec<Customer> {
        self.bookings
            .values()
            .filter(|b| !b.is_cancelled() && b.flight_id == flight_id)
            .map(|b| self.resolve_customer(b.customer_id))
            .collect()
    }

    /// A customer's active bookings in creation order.
    pub fn bookings_of(&self, customer_id: EntityId) -> Vec<&Booking> {
        self.bookings
            .values()
            .filter(|b| !b.is_cancelled() && b.customer_id == customer_id)
            .collect()
    }

    /// The stored flight, or a synthetic placeholder when the id no longer
    /// resolves (dangling reference from the data files or a hard delete).
    pub fn resolve_flight(&self, flight_id: EntityId) -> Flight {
        self.flights
            .get(&flight_id)
            .cloned()
            .unwrap_or_else(|| Flight::placeholder(flight_id))
    }

    pub fn resolve_customer(&self, customer_id: EntityId) -> Customer {
        self.customers
            .get(&customer_id)
            .cloned()
            .unwrap_or_else(|| Customer::placeholder(customer_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ledger_with_flight(capacity: u32) -> BookingLedger {
        let mut ledger = BookingLedger::new();
        ledger
            .add_flight(
                "EV101".to_string(),
                "Kathmandu".to_string(),
                "London".to_string(),
                date(2026, 12, 24),
                100.0,
                capacity,
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
    }

    #[test]
    fn test_ids_start_at_one() {
        let ledger = ledger_with_flight(150);
        assert_eq!(ledger.flight_by_id(1).unwrap().id, 1);
        assert_eq!(ledger.customer_by_id(1).unwrap().id, 1);
    }

    #[test]
    fn test_id_allocation_skips_gaps_after_removal() {
        let mut ledger = ledger_with_flight(150);
        ledger
            .add_flight(
                "EV102".to_string(),
                "Kathmandu".to_string(),
                "Delhi".to_string(),
                date(2026, 11, 1),
                80.0,
                100,
            )
            .unwrap();
        ledger.remove_flight(1).unwrap();
        // max existing id is 2, so the next flight gets 3
        let flight = ledger
            .add_flight(
                "EV103".to_string(),
                "Pokhara".to_string(),
                "Kathmandu".to_string(),
                date(2026, 11, 2),
                40.0,
                50,
            )
            .unwrap();
        assert_eq!(flight.id, 3);
    }

    #[test]
    fn test_add_booking_rejects_soft_deleted_flight() {
        let mut ledger = ledger_with_flight(150);
        ledger.soft_delete_flight(1).unwrap();
        let err = ledger.add_booking(1, 1, date(2026, 10, 1)).unwrap_err();
        assert!(matches!(err, DomainError::FlightNotFound(1)));
    }

    #[test]
    fn test_add_booking_rejects_duplicate() {
        let mut ledger = ledger_with_flight(150);
        ledger.add_booking(1, 1, date(2026, 10, 1)).unwrap();
        let err = ledger.add_booking(1, 1, date(2026, 10, 2)).unwrap_err();
        assert!(matches!(
            err,
            DomainError::DuplicateBooking {
                customer_id: 1,
                flight_id: 1
            }
        ));
    }

    #[test]
    fn test_soft_deleted_excluded_from_default_listing() {
        let mut ledger = ledger_with_flight(150);
        ledger.soft_delete_flight(1).unwrap();
        assert!(ledger.flights().is_empty());
        assert_eq!(ledger.all_flights().len(), 1);
    }

    #[test]
    fn test_remove_flight_cancels_dependent_bookings() {
        let mut ledger = ledger_with_flight(150);
        let booking_id = ledger.add_booking(1, 1, date(2026, 10, 1)).unwrap().id;
        ledger.remove_flight(1).unwrap();
        assert!(ledger.bookings().is_empty());
        assert!(ledger
            .cancelled_bookings()
            .iter()
            .any(|b| b.id == booking_id));
        // history resolves to a placeholder instead of failing
        let flight = ledger.resolve_flight(1);
        assert_eq!(flight.flight_number, "N/A");
    }

    #[test]
    fn test_preview_fee_matches_committed_fee() {
        let mut ledger = ledger_with_flight(150);
        let as_of = date(2026, 10, 1);
        let preview = ledger.preview_fee(1, as_of).unwrap();
        let fee = ledger.add_booking(1, 1, as_of).unwrap().fee;
        assert!((preview - fee).abs() < f64::EPSILON);
    }
}
