// ============================================================================
// Everest Core - Booking Entity
// File: crates/everest-core/src/domain/booking.rs
// Description: Join entity linking one customer to one flight
// ============================================================================

use chrono::NaiveDate;
use everest_shared::EntityId;
use serde::{Deserialize, Serialize};

/// Booking entity.
///
/// The (customer, flight) pair, booking date, and fee are fixed at creation.
/// Rebooking onto another flight is modeled as cancel-then-create, never as
/// in-place mutation. The cancelled flag is monotonic: once set it never
/// reverts, so cancelled bookings stay retrievable for history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: EntityId,
    pub customer_id: EntityId,
    pub flight_id: EntityId,
    pub booking_date: NaiveDate,
    pub fee: f64,
    cancelled: bool,
}

impl Booking {
    pub fn new(
        id: EntityId,
        customer_id: EntityId,
        flight_id: EntityId,
        booking_date: NaiveDate,
        fee: f64,
    ) -> Self {
        Self {
            id,
            customer_id,
            flight_id,
            booking_date,
            fee,
            cancelled: false,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// One-way transition; there is no way to reactivate a booking.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn details_short(&self) -> String {
        format!(
            "Booking #{} - customer {} on flight {} ({}), Fee: ${:.2}{}",
            self.id,
            self.customer_id,
            self.flight_id,
            self.booking_date,
            self.fee,
            if self.cancelled { " [cancelled]" } else { "" }
        )
    }
}
