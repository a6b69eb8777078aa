// ============================================================================
// Everest Core - Flight Entity
// File: crates/everest-core/src/domain/flight.rs
// Description: Inventory unit: route, schedule, capacity, and base price
// ============================================================================

use chrono::NaiveDate;
use everest_shared::EntityId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::RecordStatus;

/// Flight entity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Flight {
    pub id: EntityId,

    #[validate(length(min = 1, message = "Flight number must not be empty"))]
    pub flight_number: String,

    #[validate(length(min = 1, message = "Origin must not be empty"))]
    pub origin: String,

    #[validate(length(min = 1, message = "Destination must not be empty"))]
    pub destination: String,

    pub departure_date: NaiveDate,

    #[validate(range(min = 0.0, message = "Base price must be non-negative"))]
    pub base_price: f64,

    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: u32,

    pub status: RecordStatus,
}

impl Flight {
    pub fn new(
        id: EntityId,
        flight_number: String,
        origin: String,
        destination: String,
        departure_date: NaiveDate,
        base_price: f64,
        capacity: u32,
    ) -> Result<Self, validator::ValidationErrors> {
        let flight = Self {
            id,
            flight_number: flight_number.trim().to_string(),
            origin: origin.trim().to_string(),
            destination: destination.trim().to_string(),
            departure_date,
            base_price,
            capacity,
            status: RecordStatus::Active,
        };

        flight.validate()?;
        Ok(flight)
    }

    /// Synthetic flight standing in for a record that no longer exists.
    ///
    /// Bookings whose flight id does not resolve (dangling reference in the
    /// data files, or a hard-deleted flight) display against this record
    /// instead of failing. Bypasses validation on purpose.
    pub fn placeholder(id: EntityId) -> Self {
        Self {
            id,
            flight_number: "N/A".to_string(),
            origin: "N/A".to_string(),
            destination: "N/A".to_string(),
            departure_date: NaiveDate::default(),
            base_price: 0.0,
            capacity: 0,
            status: RecordStatus::SoftDeleted,
        }
    }

    pub fn soft_delete(&mut self) {
        self.status = RecordStatus::SoftDeleted;
    }

    pub fn is_deleted(&self) -> bool {
        self.status.is_deleted()
    }

    pub fn details_short(&self) -> String {
        format!(
            "Flight #{} - {} - {} to {} on {}",
            self.id, self.flight_number, self.origin, self.destination, self.departure_date
        )
    }
}
